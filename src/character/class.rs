//! Character classes and weapon skills

use serde::{Deserialize, Serialize};

use crate::items::SpellId;

/// Dual Wield ability (warriors, rogues, hunters, death knights)
pub const SPELL_DUAL_WIELD: SpellId = 674;
/// Shaman Dual Wield talent
pub const SPELL_SHAMAN_DUAL_WIELD: SpellId = 30798;
/// Titan's Grip talent: two-handed axes, maces and swords in one hand
pub const SPELL_TITANS_GRIP: SpellId = 46917;

/// Playable classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Class {
    Warrior,
    Paladin,
    Hunter,
    Rogue,
    Priest,
    DeathKnight,
    Shaman,
    Mage,
    Warlock,
    Druid,
}

impl Class {
    /// Decode a class id (10 is unused)
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Class::Warrior),
            2 => Some(Class::Paladin),
            3 => Some(Class::Hunter),
            4 => Some(Class::Rogue),
            5 => Some(Class::Priest),
            6 => Some(Class::DeathKnight),
            7 => Some(Class::Shaman),
            8 => Some(Class::Mage),
            9 => Some(Class::Warlock),
            11 => Some(Class::Druid),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Class::Warrior => "Warrior",
            Class::Paladin => "Paladin",
            Class::Hunter => "Hunter",
            Class::Rogue => "Rogue",
            Class::Priest => "Priest",
            Class::DeathKnight => "Death Knight",
            Class::Shaman => "Shaman",
            Class::Mage => "Mage",
            Class::Warlock => "Warlock",
            Class::Druid => "Druid",
        }
    }

    /// Weapon skills a character of this class can train
    pub fn weapon_skills(&self) -> &'static [WeaponSkill] {
        use WeaponSkill::*;
        match self {
            Class::Warrior => &[
                Axes, TwoHandedAxes, Bows, Guns, Maces, TwoHandedMaces, Polearms, Swords,
                TwoHandedSwords, Staves, FistWeapons, Daggers, Thrown, Crossbows,
            ],
            Class::Paladin | Class::DeathKnight => &[
                Axes, TwoHandedAxes, Maces, TwoHandedMaces, Polearms, Swords, TwoHandedSwords,
            ],
            Class::Hunter => &[
                Axes, TwoHandedAxes, Bows, Guns, Polearms, Swords, TwoHandedSwords, Staves,
                FistWeapons, Daggers, Thrown, Crossbows,
            ],
            Class::Rogue => &[Axes, Bows, Guns, Maces, Swords, FistWeapons, Daggers, Thrown, Crossbows],
            Class::Priest => &[Maces, Staves, Daggers, Wands],
            Class::Shaman => &[Axes, TwoHandedAxes, Maces, TwoHandedMaces, Staves, FistWeapons, Daggers],
            Class::Mage | Class::Warlock => &[Swords, Staves, Daggers, Wands],
            Class::Druid => &[Maces, TwoHandedMaces, Polearms, Staves, FistWeapons, Daggers],
        }
    }
}

/// Weapon proficiency skills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponSkill {
    Axes,
    TwoHandedAxes,
    Bows,
    Guns,
    Maces,
    TwoHandedMaces,
    Polearms,
    Swords,
    TwoHandedSwords,
    Staves,
    FistWeapons,
    Daggers,
    Thrown,
    Spears,
    Crossbows,
    Wands,
    Fishing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_ids() {
        assert_eq!(Class::from_id(1), Some(Class::Warrior));
        assert_eq!(Class::from_id(10), None);
        assert_eq!(Class::from_id(11), Some(Class::Druid));
    }

    #[test]
    fn test_caster_skills() {
        let skills = Class::Mage.weapon_skills();
        assert!(skills.contains(&WeaponSkill::Wands));
        assert!(!skills.contains(&WeaponSkill::Maces));
        assert!(!Class::Paladin.weapon_skills().contains(&WeaponSkill::Daggers));
    }
}
