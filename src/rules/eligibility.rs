//! Equip eligibility
//!
//! Class, proficiency and armor-type restrictions on top of the character's
//! own use check. Short-circuits on the first failed check.

use super::slots::is_two_hand_specialist;
use crate::character::{Character, Class, WeaponSkill};
use crate::items::{ArmorSubclass, InventoryType, ItemKind, ItemRecord, WeaponSubclass};

/// Below this level shamans and hunters stay out of mail
pub const MAIL_LEVEL: u8 = 40;

/// Skill needed to wield a weapon subclass; None means always usable
pub fn required_skill(subclass: WeaponSubclass) -> Option<WeaponSkill> {
    use WeaponSubclass::*;
    let skill = match subclass {
        Axe => WeaponSkill::Axes,
        Axe2H => WeaponSkill::TwoHandedAxes,
        Bow => WeaponSkill::Bows,
        Gun => WeaponSkill::Guns,
        Mace => WeaponSkill::Maces,
        Mace2H => WeaponSkill::TwoHandedMaces,
        Polearm => WeaponSkill::Polearms,
        Sword => WeaponSkill::Swords,
        Sword2H => WeaponSkill::TwoHandedSwords,
        Staff => WeaponSkill::Staves,
        FistWeapon => WeaponSkill::FistWeapons,
        Dagger => WeaponSkill::Daggers,
        Thrown => WeaponSkill::Thrown,
        Spear => WeaponSkill::Spears,
        Crossbow => WeaponSkill::Crossbows,
        Wand => WeaponSkill::Wands,
        FishingPole => WeaponSkill::Fishing,
        Obsolete | Exotic | Exotic2H | Miscellaneous => return None,
    };
    Some(skill)
}

/// Check if a character may equip an item
pub fn can_use(character: &dyn Character, item: &ItemRecord) -> bool {
    if !item.is_equippable() {
        return false;
    }
    if !character.can_use_item(item) {
        return false;
    }

    let class = character.class();
    if item.inventory_type == InventoryType::Shield
        && !matches!(class, Class::Warrior | Class::Paladin | Class::Shaman)
    {
        return false;
    }

    match item.kind {
        ItemKind::Weapon(subclass) => can_wield(character, subclass),
        ItemKind::Armor(subclass) => can_wear(class, character.level(), subclass),
        ItemKind::Other { .. } => true,
    }
}

fn can_wield(character: &dyn Character, subclass: WeaponSubclass) -> bool {
    if let Some(skill) = required_skill(subclass) {
        if character.skill_value(skill) == 0 {
            return false;
        }
    }
    !(is_two_hand_specialist(character) && matches!(subclass, WeaponSubclass::Polearm | WeaponSubclass::Staff))
}

fn can_wear(class: Class, level: u8, subclass: ArmorSubclass) -> bool {
    use ArmorSubclass::*;
    match subclass {
        Libram => return class == Class::Paladin,
        Idol => return class == Class::Druid,
        Totem => return class == Class::Shaman,
        Sigil => return class == Class::DeathKnight,
        _ => {}
    }

    match class {
        Class::Warrior | Class::Paladin | Class::DeathKnight => true,
        Class::Shaman | Class::Hunter => match subclass {
            Plate => false,
            Mail => level >= MAIL_LEVEL,
            _ => true,
        },
        Class::Druid | Class::Rogue => !matches!(subclass, Mail | Plate),
        Class::Mage | Class::Priest | Class::Warlock => !matches!(subclass, Leather | Mail | Plate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{CharacterSheet, SPELL_TITANS_GRIP};

    fn armor(subclass: ArmorSubclass, inventory_type: InventoryType) -> ItemRecord {
        ItemRecord::new(10, "Armor", ItemKind::Armor(subclass), inventory_type)
    }

    fn weapon(subclass: WeaponSubclass, inventory_type: InventoryType) -> ItemRecord {
        ItemRecord::new(20, "Weapon", ItemKind::Weapon(subclass), inventory_type)
    }

    #[test]
    fn test_plate_rejected_for_restricted_classes() {
        let plate = armor(ArmorSubclass::Plate, InventoryType::Chest);
        for class in [Class::Mage, Class::Priest, Class::Warlock, Class::Druid, Class::Rogue, Class::Shaman, Class::Hunter] {
            let c = CharacterSheet::new("Test", class, 60);
            assert!(!can_use(&c, &plate), "{:?} wore plate", class);
        }
        for class in [Class::Warrior, Class::Paladin, Class::DeathKnight] {
            let c = CharacterSheet::new("Test", class, 60);
            assert!(can_use(&c, &plate), "{:?} refused plate", class);
        }
    }

    #[test]
    fn test_mail_level_threshold() {
        let mail = armor(ArmorSubclass::Mail, InventoryType::Legs);
        let young = CharacterSheet::new("Rexxar", Class::Hunter, 39);
        let grown = CharacterSheet::new("Rexxar", Class::Hunter, 40);
        assert!(!can_use(&young, &mail));
        assert!(can_use(&grown, &mail));
    }

    #[test]
    fn test_cloth_wearers() {
        let mage = CharacterSheet::new("Medivh", Class::Mage, 30);
        assert!(can_use(&mage, &armor(ArmorSubclass::Cloth, InventoryType::Robe)));
        assert!(!can_use(&mage, &armor(ArmorSubclass::Leather, InventoryType::Hands)));

        let druid = CharacterSheet::new("Malfurion", Class::Druid, 30);
        assert!(can_use(&druid, &armor(ArmorSubclass::Leather, InventoryType::Hands)));
    }

    #[test]
    fn test_relics_match_one_class() {
        let cases = [
            (ArmorSubclass::Libram, Class::Paladin),
            (ArmorSubclass::Idol, Class::Druid),
            (ArmorSubclass::Totem, Class::Shaman),
            (ArmorSubclass::Sigil, Class::DeathKnight),
        ];
        for (relic, owner) in cases {
            let item = armor(relic, InventoryType::Relic);
            assert!(can_use(&CharacterSheet::new("Owner", owner, 60), &item));
            assert!(!can_use(&CharacterSheet::new("Other", Class::Warrior, 60), &item));
        }
    }

    #[test]
    fn test_shields() {
        let shield = armor(ArmorSubclass::Shield, InventoryType::Shield);
        assert!(can_use(&CharacterSheet::new("Thrall", Class::Shaman, 20), &shield));
        assert!(!can_use(&CharacterSheet::new("Anduin", Class::Priest, 20), &shield));
    }

    #[test]
    fn test_weapon_skill() {
        let priest = CharacterSheet::new("Velen", Class::Priest, 20);
        assert!(can_use(&priest, &weapon(WeaponSubclass::Mace, InventoryType::Weapon)));
        assert!(!can_use(&priest, &weapon(WeaponSubclass::Sword, InventoryType::Weapon)));
        // No skill behind miscellaneous weapons
        assert!(can_use(&priest, &weapon(WeaponSubclass::Miscellaneous, InventoryType::Weapon)));
    }

    #[test]
    fn test_titans_grip_rejects_polearms_and_staves() {
        let mut warrior = CharacterSheet::new("Grom", Class::Warrior, 60);
        let polearm = weapon(WeaponSubclass::Polearm, InventoryType::TwoHandWeapon);
        let axe = weapon(WeaponSubclass::Axe2H, InventoryType::TwoHandWeapon);
        assert!(can_use(&warrior, &polearm));

        warrior.learn(SPELL_TITANS_GRIP);
        assert!(!can_use(&warrior, &polearm));
        assert!(!can_use(&warrior, &weapon(WeaponSubclass::Staff, InventoryType::TwoHandWeapon)));
        assert!(can_use(&warrior, &axe));
    }

    #[test]
    fn test_unequippable_and_level_gate() {
        let warrior = CharacterSheet::new("Saurfang", Class::Warrior, 20);
        assert!(!can_use(&warrior, &armor(ArmorSubclass::Miscellaneous, InventoryType::NonEquip)));

        let mut helm = armor(ArmorSubclass::Plate, InventoryType::Head);
        helm.required_level = 21;
        assert!(!can_use(&warrior, &helm));
    }
}
