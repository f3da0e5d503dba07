//! Equip slots
//!
//! Raw inventory types from the item table and the character's equipment
//! positions.

use serde::{Deserialize, Serialize};

/// Inventory type of an item template (where it can be worn)
///
/// Ordering follows the item table ids, which keeps per-slot reports stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InventoryType {
    NonEquip,
    Head,
    Neck,
    Shoulders,
    Shirt,
    Chest,
    Waist,
    Legs,
    Feet,
    Wrists,
    Hands,
    Finger,
    Trinket,
    /// One-hand weapon (either hand)
    Weapon,
    Shield,
    Ranged,
    Cloak,
    TwoHandWeapon,
    Bag,
    Tabard,
    Robe,
    WeaponMainHand,
    WeaponOffHand,
    /// Held in off-hand (orbs, tomes)
    Holdable,
    Ammo,
    Thrown,
    RangedRight,
    Quiver,
    Relic,
}

impl InventoryType {
    pub fn from_id(id: u32) -> Option<Self> {
        const ALL: [InventoryType; 29] = [
            InventoryType::NonEquip,
            InventoryType::Head,
            InventoryType::Neck,
            InventoryType::Shoulders,
            InventoryType::Shirt,
            InventoryType::Chest,
            InventoryType::Waist,
            InventoryType::Legs,
            InventoryType::Feet,
            InventoryType::Wrists,
            InventoryType::Hands,
            InventoryType::Finger,
            InventoryType::Trinket,
            InventoryType::Weapon,
            InventoryType::Shield,
            InventoryType::Ranged,
            InventoryType::Cloak,
            InventoryType::TwoHandWeapon,
            InventoryType::Bag,
            InventoryType::Tabard,
            InventoryType::Robe,
            InventoryType::WeaponMainHand,
            InventoryType::WeaponOffHand,
            InventoryType::Holdable,
            InventoryType::Ammo,
            InventoryType::Thrown,
            InventoryType::RangedRight,
            InventoryType::Quiver,
            InventoryType::Relic,
        ];
        ALL.get(id as usize).copied()
    }

    /// Check if items of this type go into an equip slot
    pub fn is_equippable(&self) -> bool {
        !matches!(self, InventoryType::NonEquip)
    }

    /// Ranged weapon slots score against ranged DPS
    pub fn is_ranged(&self) -> bool {
        matches!(
            self,
            InventoryType::Ranged | InventoryType::Thrown | InventoryType::RangedRight
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            InventoryType::NonEquip => "Non-equippable",
            InventoryType::Head => "Head",
            InventoryType::Neck => "Neck",
            InventoryType::Shoulders => "Shoulders",
            InventoryType::Shirt => "Shirt",
            InventoryType::Chest => "Chest",
            InventoryType::Waist => "Waist",
            InventoryType::Legs => "Legs",
            InventoryType::Feet => "Feet",
            InventoryType::Wrists => "Wrists",
            InventoryType::Hands => "Hands",
            InventoryType::Finger => "Finger",
            InventoryType::Trinket => "Trinket",
            InventoryType::Weapon => "One-Hand",
            InventoryType::Shield => "Off Hand",
            InventoryType::Ranged => "Ranged",
            InventoryType::Cloak => "Back",
            InventoryType::TwoHandWeapon => "Two-Hand",
            InventoryType::Bag => "Bag",
            InventoryType::Tabard => "Tabard",
            InventoryType::Robe => "Robe",
            InventoryType::WeaponMainHand => "Main Hand",
            InventoryType::WeaponOffHand => "Off Hand Weapon",
            InventoryType::Holdable => "Held In Off-hand",
            InventoryType::Ammo => "Ammo",
            InventoryType::Thrown => "Thrown",
            InventoryType::RangedRight => "Ranged Right",
            InventoryType::Quiver => "Quiver",
            InventoryType::Relic => "Relic",
        }
    }
}

/// Character equipment positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Head,
    Neck,
    Shoulders,
    Shirt,
    Chest,
    Waist,
    Legs,
    Feet,
    Wrists,
    Hands,
    Finger1,
    Finger2,
    Trinket1,
    Trinket2,
    Back,
    MainHand,
    OffHand,
    Ranged,
    Tabard,
}

impl EquipmentSlot {
    /// Get all slots in paper-doll order
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::Head,
            EquipmentSlot::Neck,
            EquipmentSlot::Shoulders,
            EquipmentSlot::Shirt,
            EquipmentSlot::Chest,
            EquipmentSlot::Waist,
            EquipmentSlot::Legs,
            EquipmentSlot::Feet,
            EquipmentSlot::Wrists,
            EquipmentSlot::Hands,
            EquipmentSlot::Finger1,
            EquipmentSlot::Finger2,
            EquipmentSlot::Trinket1,
            EquipmentSlot::Trinket2,
            EquipmentSlot::Back,
            EquipmentSlot::MainHand,
            EquipmentSlot::OffHand,
            EquipmentSlot::Ranged,
            EquipmentSlot::Tabard,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        assert_eq!(InventoryType::from_id(0), Some(InventoryType::NonEquip));
        assert_eq!(InventoryType::from_id(13), Some(InventoryType::Weapon));
        assert_eq!(InventoryType::from_id(20), Some(InventoryType::Robe));
        assert_eq!(InventoryType::from_id(28), Some(InventoryType::Relic));
        assert_eq!(InventoryType::from_id(29), None);
    }

    #[test]
    fn test_ranged_slots() {
        assert!(InventoryType::Ranged.is_ranged());
        assert!(InventoryType::Thrown.is_ranged());
        assert!(InventoryType::RangedRight.is_ranged());
        assert!(!InventoryType::TwoHandWeapon.is_ranged());
    }
}
