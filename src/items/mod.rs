//! Item system

pub mod item;
pub mod stats;
pub mod slots;
pub mod enchantment;
pub mod catalog;

pub use item::{ItemId, SpellId, ItemRecord, ItemKind, ItemStat, ItemSpell, SpellTrigger, Quality, WeaponSubclass, ArmorSubclass, RandomEnchantSlot, MAX_ITEM_STATS};
pub use stats::StatKind;
pub use slots::{InventoryType, EquipmentSlot};
pub use enchantment::{EnchantmentId, RandomEnchantGroup, RandomEnchantment, EnchantEffect, EnchantAmount};
pub use catalog::{ItemCatalog, CatalogQuery, CatalogClass};
