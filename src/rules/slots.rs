//! Slot resolution
//!
//! Folds raw inventory types into the buckets items compete in. Held and
//! candidate items go through the same rules so their buckets line up.

use crate::character::{Character, Class, SPELL_DUAL_WIELD, SPELL_SHAMAN_DUAL_WIELD, SPELL_TITANS_GRIP};
use crate::items::InventoryType;

/// Check if the character fights with a weapon in each hand
pub fn can_dual_wield(character: &dyn Character) -> bool {
    match character.class() {
        Class::Warrior | Class::Rogue | Class::Hunter | Class::DeathKnight => character.has_spell(SPELL_DUAL_WIELD),
        Class::Shaman => character.has_spell(SPELL_SHAMAN_DUAL_WIELD),
        _ => false,
    }
}

/// Check if the character wields two-handers in one hand
pub fn is_two_hand_specialist(character: &dyn Character) -> bool {
    character.class() == Class::Warrior && character.has_spell(SPELL_TITANS_GRIP)
}

/// Bucket an item with this inventory type competes in
pub fn canonical_slot(character: &dyn Character, inventory_type: InventoryType) -> InventoryType {
    match inventory_type {
        InventoryType::WeaponMainHand if !can_dual_wield(character) => InventoryType::Weapon,
        InventoryType::Robe => InventoryType::Chest,
        InventoryType::Holdable | InventoryType::WeaponOffHand => InventoryType::Shield,
        InventoryType::Thrown | InventoryType::RangedRight => InventoryType::Ranged,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterSheet;

    #[test]
    fn test_aliases() {
        let mage = CharacterSheet::new("Khadgar", Class::Mage, 20);
        assert_eq!(canonical_slot(&mage, InventoryType::Robe), InventoryType::Chest);
        assert_eq!(canonical_slot(&mage, InventoryType::Holdable), InventoryType::Shield);
        assert_eq!(canonical_slot(&mage, InventoryType::WeaponOffHand), InventoryType::Shield);
        assert_eq!(canonical_slot(&mage, InventoryType::Thrown), InventoryType::Ranged);
        assert_eq!(canonical_slot(&mage, InventoryType::RangedRight), InventoryType::Ranged);
        assert_eq!(canonical_slot(&mage, InventoryType::Head), InventoryType::Head);
        assert_eq!(canonical_slot(&mage, InventoryType::Finger), InventoryType::Finger);
    }

    #[test]
    fn test_main_hand_depends_on_dual_wield() {
        let mut warrior = CharacterSheet::new("Varian", Class::Warrior, 20);
        assert!(!can_dual_wield(&warrior));
        assert_eq!(canonical_slot(&warrior, InventoryType::WeaponMainHand), InventoryType::Weapon);

        warrior.learn(SPELL_DUAL_WIELD);
        assert!(can_dual_wield(&warrior));
        assert_eq!(canonical_slot(&warrior, InventoryType::WeaponMainHand), InventoryType::WeaponMainHand);
    }

    #[test]
    fn test_dual_wield_probes() {
        let mut shaman = CharacterSheet::new("Nobundo", Class::Shaman, 40);
        shaman.learn(SPELL_DUAL_WIELD);
        assert!(!can_dual_wield(&shaman));
        shaman.learn(SPELL_SHAMAN_DUAL_WIELD);
        assert!(can_dual_wield(&shaman));

        let mut paladin = CharacterSheet::new("Uther", Class::Paladin, 40);
        paladin.learn(SPELL_DUAL_WIELD);
        assert!(!can_dual_wield(&paladin));
    }

    #[test]
    fn test_titans_grip_is_warrior_only() {
        let mut warrior = CharacterSheet::new("Garrosh", Class::Warrior, 60);
        warrior.learn(SPELL_TITANS_GRIP);
        assert!(is_two_hand_specialist(&warrior));

        let mut dk = CharacterSheet::new("Koltira", Class::DeathKnight, 60);
        dk.learn(SPELL_TITANS_GRIP);
        assert!(!is_two_hand_specialist(&dk));
    }

    #[test]
    fn test_resolution_is_stable() {
        let rogue = CharacterSheet::new("Valeera", Class::Rogue, 20);
        for id in 0..29 {
            if let Some(inv) = InventoryType::from_id(id) {
                let once = canonical_slot(&rogue, inv);
                assert_eq!(canonical_slot(&rogue, once), once, "{:?}", inv);
            }
        }
    }
}
