//! Character sheet
//!
//! A self-contained, serializable character: class, level, known spells,
//! weapon skills, equipment and storage. Implements both `Character` and
//! `ItemStore`, which is all the upgrade engine needs from a host.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::access::{Character, HeldItem, ItemLocation, ItemStore, StoreDenial};
use super::class::{Class, WeaponSkill};
use crate::error;
use crate::items::{EnchantmentId, EquipmentSlot, ItemId, ItemRecord, SpellId};

/// Slots in the default backpack
pub const BACKPACK_SIZE: usize = 16;

/// Skill points per character level for trained weapon skills
const SKILL_PER_LEVEL: u16 = 5;

/// A concrete item in storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInstance {
    pub item: ItemId,
    #[serde(default)]
    pub enchantment: Option<EnchantmentId>,
}

impl ItemInstance {
    pub fn new(item: ItemId) -> Self {
        Self { item, enchantment: None }
    }
}

/// An equipped bag (or bank bag)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bag {
    pub size: usize,
    #[serde(default)]
    pub items: Vec<ItemInstance>,
}

impl Bag {
    pub fn new(size: usize) -> Self {
        Self { size, items: Vec::new() }
    }

    pub fn has_space(&self) -> bool {
        self.items.len() < self.size
    }
}

/// Serializable character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub name: String,
    pub class: Class,
    pub level: u8,
    /// Known spells, abilities and talents
    #[serde(default)]
    pub spells: HashSet<SpellId>,
    /// Weapon skill overrides; trained class skills default to level * 5
    #[serde(default)]
    pub skills: HashMap<WeaponSkill, u16>,
    #[serde(default)]
    pub equipment: HashMap<EquipmentSlot, ItemInstance>,
    #[serde(default)]
    pub backpack: Vec<ItemInstance>,
    #[serde(default)]
    pub bags: Vec<Bag>,
    #[serde(default)]
    pub bank: Vec<ItemInstance>,
    #[serde(default)]
    pub bank_bags: Vec<Bag>,
}

impl CharacterSheet {
    /// Create a fresh character with an empty backpack
    pub fn new(name: impl Into<String>, class: Class, level: u8) -> Self {
        Self {
            name: name.into(),
            class,
            level,
            spells: HashSet::new(),
            skills: HashMap::new(),
            equipment: HashMap::new(),
            backpack: Vec::new(),
            bags: Vec::new(),
            bank: Vec::new(),
            bank_bags: Vec::new(),
        }
    }

    /// Read a character from a RON file
    pub fn load(path: &Path) -> error::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(ron::from_str(&content)?)
    }

    /// Write the character back as RON
    pub fn save(&self, path: &Path) -> error::Result<()> {
        let ron = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        fs::write(path, ron)?;
        log::info!("Character {} saved to {:?}", self.name, path);
        Ok(())
    }

    /// Learn a spell, ability or talent
    pub fn learn(&mut self, spell: SpellId) {
        self.spells.insert(spell);
    }

    /// Equip an item, returning the previously equipped item if any
    pub fn equip(&mut self, slot: EquipmentSlot, item: ItemInstance) -> Option<ItemInstance> {
        self.equipment.insert(slot, item)
    }

    /// Count free storage slots (backpack + bags)
    pub fn free_slots(&self) -> usize {
        let backpack = BACKPACK_SIZE.saturating_sub(self.backpack.len());
        let bags: usize = self.bags.iter().map(|b| b.size.saturating_sub(b.items.len())).sum();
        backpack + bags
    }

    /// Find room for one item in the backpack, then the bags
    fn store_one(&mut self, instance: ItemInstance) -> bool {
        if self.backpack.len() < BACKPACK_SIZE {
            self.backpack.push(instance);
            return true;
        }
        match self.bags.iter_mut().find(|b| b.has_space()) {
            Some(bag) => {
                bag.items.push(instance);
                true
            }
            None => false,
        }
    }
}

impl Character for CharacterSheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn class(&self) -> Class {
        self.class
    }

    fn level(&self) -> u8 {
        self.level
    }

    fn has_spell(&self, spell: SpellId) -> bool {
        self.spells.contains(&spell)
    }

    fn skill_value(&self, skill: WeaponSkill) -> u16 {
        if let Some(&value) = self.skills.get(&skill) {
            return value;
        }
        if self.class.weapon_skills().contains(&skill) {
            u16::from(self.level) * SKILL_PER_LEVEL
        } else {
            0
        }
    }

    fn equipped(&self, slot: EquipmentSlot) -> Option<ItemId> {
        self.equipment.get(&slot).map(|i| i.item)
    }

    fn held_items(&self) -> Vec<HeldItem> {
        let held = |instance: &ItemInstance, location| HeldItem {
            item: instance.item,
            enchantment: instance.enchantment,
            location,
        };

        let mut items = Vec::new();
        items.extend(self.backpack.iter().map(|i| held(i, ItemLocation::Backpack)));
        for bag in &self.bags {
            items.extend(bag.items.iter().map(|i| held(i, ItemLocation::Bag)));
        }
        for slot in EquipmentSlot::all() {
            if let Some(instance) = self.equipment.get(slot) {
                items.push(held(instance, ItemLocation::Equipped(*slot)));
            }
        }
        items.extend(self.bank.iter().map(|i| held(i, ItemLocation::Bank)));
        for bag in &self.bank_bags {
            items.extend(bag.items.iter().map(|i| held(i, ItemLocation::BankBag)));
        }
        items
    }

    fn can_use_item(&self, item: &ItemRecord) -> bool {
        self.level >= item.required_level
    }
}

impl ItemStore for CharacterSheet {
    fn store_new_item(
        &mut self,
        item: ItemId,
        count: u32,
        enchantment: Option<EnchantmentId>,
    ) -> Result<(), StoreDenial> {
        if self.free_slots() < count as usize {
            return Err(StoreDenial::InventoryFull);
        }
        for _ in 0..count {
            if !self.store_one(ItemInstance { item, enchantment }) {
                return Err(StoreDenial::InventoryFull);
            }
        }
        log::debug!("{} received item {} x{}", self.name, item, count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_defaults() {
        let mut sheet = CharacterSheet::new("Thrall", Class::Shaman, 20);
        assert_eq!(sheet.skill_value(WeaponSkill::Maces), 100);
        assert_eq!(sheet.skill_value(WeaponSkill::Swords), 0);

        sheet.skills.insert(WeaponSkill::Maces, 3);
        assert_eq!(sheet.skill_value(WeaponSkill::Maces), 3);
    }

    #[test]
    fn test_held_items_cover_all_storage() {
        let mut sheet = CharacterSheet::new("Jaina", Class::Mage, 30);
        sheet.backpack.push(ItemInstance::new(1));
        sheet.bags.push(Bag { size: 4, items: vec![ItemInstance::new(2)] });
        sheet.equip(EquipmentSlot::Head, ItemInstance::new(3));
        sheet.bank.push(ItemInstance::new(4));
        sheet.bank_bags.push(Bag { size: 4, items: vec![ItemInstance::new(5)] });

        let held = sheet.held_items();
        let ids: Vec<ItemId> = held.iter().map(|h| h.item).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(held[2].location, ItemLocation::Equipped(EquipmentSlot::Head));
        assert_eq!(held[4].location, ItemLocation::BankBag);
    }

    #[test]
    fn test_store_fills_backpack_then_bags() {
        let mut sheet = CharacterSheet::new("Uther", Class::Paladin, 40);
        sheet.bags.push(Bag::new(1));
        for id in 0..BACKPACK_SIZE as ItemId {
            sheet.backpack.push(ItemInstance::new(id));
        }

        let enchant = Some(EnchantmentId::Suffix(7));
        assert!(sheet.store_new_item(100, 1, enchant).is_ok());
        assert_eq!(sheet.bags[0].items[0].enchantment, enchant);

        assert_eq!(sheet.store_new_item(101, 1, None), Err(StoreDenial::InventoryFull));
    }
}
