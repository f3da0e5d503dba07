//! Item stat types
//!
//! The stat ids item tables use for base stats and enchantment sub-effects.

use serde::{Deserialize, Serialize};

/// Stat type of an item stat line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Mana,
    Health,
    Agility,
    Strength,
    Intellect,
    Spirit,
    Stamina,
    DefenseSkillRating,
    DodgeRating,
    ParryRating,
    BlockRating,
    HitMeleeRating,
    HitRangedRating,
    HitSpellRating,
    CritMeleeRating,
    CritRangedRating,
    CritSpellRating,
    HitTakenRating,
    CritTakenRating,
    HasteMeleeRating,
    HasteRangedRating,
    HasteSpellRating,
    HitRating,
    CritRating,
    ResilienceRating,
    HasteRating,
    ExpertiseRating,
    AttackPower,
    RangedAttackPower,
    FeralAttackPower,
    SpellHealingDone,
    SpellDamageDone,
    ManaRegeneration,
    ArmorPenetrationRating,
    SpellPower,
    HealthRegen,
    SpellPenetration,
    BlockValue,
    /// A stat id this table does not know
    Other(u32),
}

impl StatKind {
    /// Decode a raw item-table stat id
    pub fn from_id(id: u32) -> Self {
        match id {
            0 => StatKind::Mana,
            1 => StatKind::Health,
            3 => StatKind::Agility,
            4 => StatKind::Strength,
            5 => StatKind::Intellect,
            6 => StatKind::Spirit,
            7 => StatKind::Stamina,
            12 => StatKind::DefenseSkillRating,
            13 => StatKind::DodgeRating,
            14 => StatKind::ParryRating,
            15 => StatKind::BlockRating,
            16 => StatKind::HitMeleeRating,
            17 => StatKind::HitRangedRating,
            18 => StatKind::HitSpellRating,
            19 => StatKind::CritMeleeRating,
            20 => StatKind::CritRangedRating,
            21 => StatKind::CritSpellRating,
            22..=24 | 33 => StatKind::HitTakenRating,
            25..=27 | 34 => StatKind::CritTakenRating,
            28 => StatKind::HasteMeleeRating,
            29 => StatKind::HasteRangedRating,
            30 => StatKind::HasteSpellRating,
            31 => StatKind::HitRating,
            32 => StatKind::CritRating,
            35 => StatKind::ResilienceRating,
            36 => StatKind::HasteRating,
            37 => StatKind::ExpertiseRating,
            38 => StatKind::AttackPower,
            39 => StatKind::RangedAttackPower,
            40 => StatKind::FeralAttackPower,
            41 => StatKind::SpellHealingDone,
            42 => StatKind::SpellDamageDone,
            43 => StatKind::ManaRegeneration,
            44 => StatKind::ArmorPenetrationRating,
            45 => StatKind::SpellPower,
            46 => StatKind::HealthRegen,
            47 => StatKind::SpellPenetration,
            48 => StatKind::BlockValue,
            other => StatKind::Other(other),
        }
    }
}
