//! Attribute keys
//!
//! The key space weight profiles are expressed in. Named stats plus three
//! synthetic keys for values derived from an item rather than listed on it.

use serde::{Deserialize, Serialize};

/// A weighted attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttributeKey {
    Strength,
    Agility,
    Stamina,
    Intellect,
    Spirit,
    HitRating,
    CritRating,
    HasteRating,
    ExpertiseRating,
    ArmorPenetrationRating,
    BlockRating,
    BlockValue,
    SpellPower,
    AttackPower,
    ManaRegen,
    HealthRegen,
    DefenseRating,
    DodgeRating,
    ParryRating,
    /// Weapon DPS of non-ranged weapons
    MeleeDps,
    /// Armor value
    Armor,
    /// Weapon DPS of bows, guns, crossbows, wands and thrown weapons
    RangedDps,
}

impl AttributeKey {
    pub fn name(&self) -> &'static str {
        match self {
            AttributeKey::Strength => "Strength",
            AttributeKey::Agility => "Agility",
            AttributeKey::Stamina => "Stamina",
            AttributeKey::Intellect => "Intellect",
            AttributeKey::Spirit => "Spirit",
            AttributeKey::HitRating => "Hit Rating",
            AttributeKey::CritRating => "Critical Strike Rating",
            AttributeKey::HasteRating => "Haste Rating",
            AttributeKey::ExpertiseRating => "Expertise Rating",
            AttributeKey::ArmorPenetrationRating => "Armor Penetration Rating",
            AttributeKey::BlockRating => "Block Rating",
            AttributeKey::BlockValue => "Block Value",
            AttributeKey::SpellPower => "Spell Power",
            AttributeKey::AttackPower => "Attack Power",
            AttributeKey::ManaRegen => "Mana per 5 sec.",
            AttributeKey::HealthRegen => "Health per 5 sec.",
            AttributeKey::DefenseRating => "Defense Rating",
            AttributeKey::DodgeRating => "Dodge Rating",
            AttributeKey::ParryRating => "Parry Rating",
            AttributeKey::MeleeDps => "Melee DPS",
            AttributeKey::Armor => "Armor",
            AttributeKey::RangedDps => "Ranged DPS",
        }
    }
}
