//! Character access
//!
//! What the engine may ask of (and do to) the character it evaluates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::class::{Class, WeaponSkill};
use crate::items::{EnchantmentId, EquipmentSlot, ItemId, ItemRecord, SpellId};

/// Where a held item currently lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemLocation {
    Equipped(EquipmentSlot),
    Backpack,
    Bag,
    Bank,
    BankBag,
}

/// An item instance the character owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldItem {
    pub item: ItemId,
    pub enchantment: Option<EnchantmentId>,
    pub location: ItemLocation,
}

/// Read-only view of a character
pub trait Character {
    fn name(&self) -> &str;

    fn class(&self) -> Class;

    fn level(&self) -> u8;

    /// Check if the character knows a spell, ability or talent
    fn has_spell(&self, spell: SpellId) -> bool;

    /// Current proficiency in a weapon skill (0 = untrained)
    fn skill_value(&self, skill: WeaponSkill) -> u16;

    /// Template ID of the item in an equipment slot
    fn equipped(&self, slot: EquipmentSlot) -> Option<ItemId>;

    /// Everything the character owns: equipped, carried and banked
    fn held_items(&self) -> Vec<HeldItem>;

    /// Generic use check (level, binding, reputation, ...)
    fn can_use_item(&self, item: &ItemRecord) -> bool;
}

/// Why new items could not be stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum StoreDenial {
    #[error("inventory is full")]
    InventoryFull,
    #[error("too many of that item")]
    ItemMaxCount,
    #[error("item does not exist")]
    ItemNotFound,
}

/// Creates new item instances in the character's storage
pub trait ItemStore {
    fn store_new_item(
        &mut self,
        item: ItemId,
        count: u32,
        enchantment: Option<EnchantmentId>,
    ) -> Result<(), StoreDenial>;
}
