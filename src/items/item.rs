//! Item definitions
//!
//! Read-only item records as the host's item table describes them.

use serde::{Deserialize, Serialize};

use super::slots::InventoryType;
use super::stats::StatKind;
use super::enchantment::RandomEnchantGroup;

/// Item template ID
pub type ItemId = u32;

/// Spell ID referenced by items and character probes
pub type SpellId = u32;

/// Item tables carry at most this many base stat entries
pub const MAX_ITEM_STATS: usize = 10;

/// Item quality tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quality {
    Poor,      // Grey
    Common,    // White
    Uncommon,  // Green
    Rare,      // Blue
    Epic,      // Purple
    Legendary, // Orange
    Artifact,
    Heirloom,
}

impl Quality {
    pub fn name(&self) -> &'static str {
        match self {
            Quality::Poor => "Poor",
            Quality::Common => "Common",
            Quality::Uncommon => "Uncommon",
            Quality::Rare => "Rare",
            Quality::Epic => "Epic",
            Quality::Legendary => "Legendary",
            Quality::Artifact => "Artifact",
            Quality::Heirloom => "Heirloom",
        }
    }
}

/// Weapon subclasses, in item table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponSubclass {
    Axe,
    Axe2H,
    Bow,
    Gun,
    Mace,
    Mace2H,
    Polearm,
    Sword,
    Sword2H,
    Obsolete,
    Staff,
    Exotic,
    Exotic2H,
    FistWeapon,
    Miscellaneous,
    Dagger,
    Thrown,
    Spear,
    Crossbow,
    Wand,
    FishingPole,
}

impl WeaponSubclass {
    pub fn from_id(id: u32) -> Option<Self> {
        const ALL: [WeaponSubclass; 21] = [
            WeaponSubclass::Axe,
            WeaponSubclass::Axe2H,
            WeaponSubclass::Bow,
            WeaponSubclass::Gun,
            WeaponSubclass::Mace,
            WeaponSubclass::Mace2H,
            WeaponSubclass::Polearm,
            WeaponSubclass::Sword,
            WeaponSubclass::Sword2H,
            WeaponSubclass::Obsolete,
            WeaponSubclass::Staff,
            WeaponSubclass::Exotic,
            WeaponSubclass::Exotic2H,
            WeaponSubclass::FistWeapon,
            WeaponSubclass::Miscellaneous,
            WeaponSubclass::Dagger,
            WeaponSubclass::Thrown,
            WeaponSubclass::Spear,
            WeaponSubclass::Crossbow,
            WeaponSubclass::Wand,
            WeaponSubclass::FishingPole,
        ];
        ALL.get(id as usize).copied()
    }
}

/// Armor subclasses, in item table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmorSubclass {
    Miscellaneous,
    Cloth,
    Leather,
    Mail,
    Plate,
    Buckler,
    Shield,
    Libram,
    Idol,
    Totem,
    Sigil,
}

impl ArmorSubclass {
    pub fn from_id(id: u32) -> Option<Self> {
        const ALL: [ArmorSubclass; 11] = [
            ArmorSubclass::Miscellaneous,
            ArmorSubclass::Cloth,
            ArmorSubclass::Leather,
            ArmorSubclass::Mail,
            ArmorSubclass::Plate,
            ArmorSubclass::Buckler,
            ArmorSubclass::Shield,
            ArmorSubclass::Libram,
            ArmorSubclass::Idol,
            ArmorSubclass::Totem,
            ArmorSubclass::Sigil,
        ];
        ALL.get(id as usize).copied()
    }
}

/// Item class together with its subclass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon(WeaponSubclass),
    Armor(ArmorSubclass),
    /// Anything else (consumables, containers, reagents, ...)
    Other { class: u32, subclass: u32 },
}

impl ItemKind {
    pub fn is_weapon(&self) -> bool {
        matches!(self, ItemKind::Weapon(_))
    }

    pub fn is_armor(&self) -> bool {
        matches!(self, ItemKind::Armor(_))
    }
}

/// A base stat line on an item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemStat {
    pub stat: StatKind,
    pub value: i32,
}

/// When an item's spell fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellTrigger {
    OnUse,
    OnEquip,
    ChanceOnHit,
    Soulstone,
    OnUseNoDelay,
    LearnSpell,
}

/// Spell reference carried by an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpell {
    pub spell: SpellId,
    pub trigger: SpellTrigger,
}

/// Random enchantment slot of an item
///
/// Property and suffix slots never coexist on one template, so a single
/// optional enum models both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RandomEnchantSlot {
    /// Random property group (flat stat amounts)
    Property(u32),
    /// Random suffix group; amounts scale with the item's suffix factor
    Suffix { group: u32, factor: u32 },
}

impl RandomEnchantSlot {
    /// Key used to look the options up in the enchantment table
    pub fn group(&self) -> RandomEnchantGroup {
        match *self {
            RandomEnchantSlot::Property(group) => RandomEnchantGroup::Property(group),
            RandomEnchantSlot::Suffix { group, .. } => RandomEnchantGroup::Suffix(group),
        }
    }

    /// Suffix factor (zero for property slots)
    pub fn suffix_factor(&self) -> u32 {
        match *self {
            RandomEnchantSlot::Property(_) => 0,
            RandomEnchantSlot::Suffix { factor, .. } => factor,
        }
    }
}

/// An item template record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Template ID
    pub id: ItemId,
    /// Display name
    pub name: String,
    /// Class and subclass
    pub kind: ItemKind,
    /// Raw equip slot
    pub inventory_type: InventoryType,
    pub quality: Quality,
    #[serde(default)]
    pub item_level: u16,
    #[serde(default)]
    pub required_level: u8,
    #[serde(default)]
    pub required_reputation_faction: u32,
    #[serde(default)]
    pub sell_price: u32,
    #[serde(default)]
    pub flags_extra: u32,
    /// Base stat lines (only the first `MAX_ITEM_STATS` are read)
    #[serde(default)]
    pub stats: Vec<ItemStat>,
    #[serde(default)]
    pub min_damage: f64,
    #[serde(default)]
    pub max_damage: f64,
    /// Weapon delay as stored in the item table
    #[serde(default)]
    pub delay: f64,
    #[serde(default)]
    pub armor: u32,
    /// Shield block value
    #[serde(default)]
    pub block: u32,
    #[serde(default)]
    pub spells: Vec<ItemSpell>,
    #[serde(default)]
    pub random_enchant: Option<RandomEnchantSlot>,
}

impl ItemRecord {
    /// Create a bare record; callers fill in the rest
    pub fn new(id: ItemId, name: impl Into<String>, kind: ItemKind, inventory_type: InventoryType) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            inventory_type,
            quality: Quality::Common,
            item_level: 1,
            required_level: 0,
            required_reputation_faction: 0,
            sell_price: 1,
            flags_extra: 0,
            stats: Vec::new(),
            min_damage: 0.0,
            max_damage: 0.0,
            delay: 0.0,
            armor: 0,
            block: 0,
            spells: Vec::new(),
            random_enchant: None,
        }
    }

    /// Base stat lines, capped at the table limit
    pub fn base_stats(&self) -> &[ItemStat] {
        &self.stats[..self.stats.len().min(MAX_ITEM_STATS)]
    }

    /// Spells that apply while the item is worn
    pub fn on_equip_spells(&self) -> impl Iterator<Item = SpellId> + '_ {
        self.spells
            .iter()
            .filter(|s| s.trigger == SpellTrigger::OnEquip)
            .map(|s| s.spell)
    }

    /// Check if the item goes into an equipment slot at all
    pub fn is_equippable(&self) -> bool {
        self.inventory_type.is_equippable()
    }

    /// Average weapon damage per second; zero for a missing delay
    pub fn dps(&self) -> f64 {
        if self.delay <= 0.0 {
            return 0.0;
        }
        1000.0 * (self.min_damage + self.max_damage) / 2.0 / self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subclass_ids() {
        assert_eq!(WeaponSubclass::from_id(0), Some(WeaponSubclass::Axe));
        assert_eq!(WeaponSubclass::from_id(10), Some(WeaponSubclass::Staff));
        assert_eq!(WeaponSubclass::from_id(20), Some(WeaponSubclass::FishingPole));
        assert_eq!(WeaponSubclass::from_id(21), None);
        assert_eq!(ArmorSubclass::from_id(4), Some(ArmorSubclass::Plate));
    }

    #[test]
    fn test_dps() {
        let mut sword = ItemRecord::new(1, "Sword", ItemKind::Weapon(WeaponSubclass::Sword), InventoryType::Weapon);
        sword.min_damage = 10.0;
        sword.max_damage = 20.0;
        sword.delay = 2.0;
        assert_eq!(sword.dps(), 7500.0);

        sword.delay = 0.0;
        assert_eq!(sword.dps(), 0.0);
    }

    #[test]
    fn test_base_stats_capped() {
        let mut item = ItemRecord::new(1, "Overloaded", ItemKind::Armor(ArmorSubclass::Cloth), InventoryType::Head);
        item.stats = (0..14).map(|_| ItemStat { stat: StatKind::Stamina, value: 1 }).collect();
        assert_eq!(item.base_stats().len(), MAX_ITEM_STATS);
    }
}
