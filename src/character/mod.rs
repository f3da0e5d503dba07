//! Characters as the upgrade engine sees them

pub mod class;
pub mod access;
pub mod sheet;

pub use class::{Class, WeaponSkill, SPELL_DUAL_WIELD, SPELL_SHAMAN_DUAL_WIELD, SPELL_TITANS_GRIP};
pub use access::{Character, ItemStore, StoreDenial, HeldItem, ItemLocation};
pub use sheet::{CharacterSheet, ItemInstance, Bag, BACKPACK_SIZE};
