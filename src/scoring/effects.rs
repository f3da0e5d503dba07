//! Stat and effect normalization
//!
//! Maps raw item stat lines and on-equip spell auras into the attribute key
//! space the weight profiles use. Both mappings are fixed tables: anything not
//! listed is either explicitly unscored or reported as unhandled.

use serde::{Deserialize, Serialize};

use super::attribute::AttributeKey;
use crate::items::{SpellId, StatKind};

/// Aura kind of a spell effect, by aura id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuraKind {
    Dummy,
    ModDamageDone,
    DamageShield,
    ModResistance,
    ModStat,
    ModSkill,
    ModIncreaseSpeed,
    ModIncreaseMountedSpeed,
    ModIncreaseHealth,
    ProcTriggerSpell,
    ModDamageDoneCreature,
    WaterBreathing,
    ModRegen,
    ModPowerRegen,
    ModAttackPower,
    ModMeleeAttackPowerVersus,
    ModRangedAttackPower,
    ModRangedAttackPowerVersus,
    ModHealingDone,
    ModShieldBlockValue,
    ModFlatSpellDamageVersus,
    ModRating,
    /// An aura id without an entry here
    Other(u32),
}

impl AuraKind {
    pub fn from_id(id: u32) -> Self {
        match id {
            4 => AuraKind::Dummy,
            13 => AuraKind::ModDamageDone,
            15 => AuraKind::DamageShield,
            22 => AuraKind::ModResistance,
            29 => AuraKind::ModStat,
            30 => AuraKind::ModSkill,
            31 => AuraKind::ModIncreaseSpeed,
            32 => AuraKind::ModIncreaseMountedSpeed,
            34 => AuraKind::ModIncreaseHealth,
            42 => AuraKind::ProcTriggerSpell,
            59 => AuraKind::ModDamageDoneCreature,
            82 => AuraKind::WaterBreathing,
            84 => AuraKind::ModRegen,
            85 => AuraKind::ModPowerRegen,
            99 => AuraKind::ModAttackPower,
            102 => AuraKind::ModMeleeAttackPowerVersus,
            124 => AuraKind::ModRangedAttackPower,
            131 => AuraKind::ModRangedAttackPowerVersus,
            135 => AuraKind::ModHealingDone,
            158 => AuraKind::ModShieldBlockValue,
            180 => AuraKind::ModFlatSpellDamageVersus,
            189 => AuraKind::ModRating,
            other => AuraKind::Other(other),
        }
    }
}

/// Combat rating bit positions used by rating auras
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CombatRating {
    WeaponSkill = 0,
    DefenseSkill = 1,
    Dodge = 2,
    Parry = 3,
    Block = 4,
    HitMelee = 5,
    HitRanged = 6,
    HitSpell = 7,
    CritMelee = 8,
    CritRanged = 9,
    CritSpell = 10,
    HitTakenMelee = 11,
    HitTakenRanged = 12,
    HitTakenSpell = 13,
    CritTakenMelee = 14,
    CritTakenRanged = 15,
    CritTakenSpell = 16,
    HasteMelee = 17,
    HasteRanged = 18,
    HasteSpell = 19,
    WeaponSkillMainHand = 20,
    WeaponSkillOffHand = 21,
    WeaponSkillRanged = 22,
    Expertise = 23,
    ArmorPenetration = 24,
}

impl CombatRating {
    const ALL: [CombatRating; 25] = [
        CombatRating::WeaponSkill,
        CombatRating::DefenseSkill,
        CombatRating::Dodge,
        CombatRating::Parry,
        CombatRating::Block,
        CombatRating::HitMelee,
        CombatRating::HitRanged,
        CombatRating::HitSpell,
        CombatRating::CritMelee,
        CombatRating::CritRanged,
        CombatRating::CritSpell,
        CombatRating::HitTakenMelee,
        CombatRating::HitTakenRanged,
        CombatRating::HitTakenSpell,
        CombatRating::CritTakenMelee,
        CombatRating::CritTakenRanged,
        CombatRating::CritTakenSpell,
        CombatRating::HasteMelee,
        CombatRating::HasteRanged,
        CombatRating::HasteSpell,
        CombatRating::WeaponSkillMainHand,
        CombatRating::WeaponSkillOffHand,
        CombatRating::WeaponSkillRanged,
        CombatRating::Expertise,
        CombatRating::ArmorPenetration,
    ];

    pub fn bit(self) -> u32 {
        1 << self as u32
    }

    /// Ratings set in an aura's bitmask, lowest bit first
    pub fn from_mask(mask: u32) -> impl Iterator<Item = CombatRating> {
        Self::ALL.into_iter().filter(move |r| mask & r.bit() != 0)
    }

    /// Attribute a rating is scored under; weapon skill and damage-taken
    /// ratings have none
    pub fn attribute(self) -> Option<AttributeKey> {
        use CombatRating::*;
        match self {
            DefenseSkill => Some(AttributeKey::DefenseRating),
            Dodge => Some(AttributeKey::DodgeRating),
            Parry => Some(AttributeKey::ParryRating),
            Block => Some(AttributeKey::BlockRating),
            HitMelee | HitRanged | HitSpell => Some(AttributeKey::HitRating),
            CritMelee | CritRanged | CritSpell => Some(AttributeKey::CritRating),
            HasteMelee | HasteRanged | HasteSpell => Some(AttributeKey::HasteRating),
            Expertise => Some(AttributeKey::ExpertiseRating),
            ArmorPenetration => Some(AttributeKey::ArmorPenetrationRating),
            WeaponSkill | WeaponSkillMainHand | WeaponSkillOffHand | WeaponSkillRanged => None,
            HitTakenMelee | HitTakenRanged | HitTakenSpell => None,
            CritTakenMelee | CritTakenRanged | CritTakenSpell => None,
        }
    }
}

/// One aura effect of a spell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpellEffect {
    pub aura: AuraKind,
    /// Magnitude applied by the aura
    pub amount: i32,
    /// Aura-specific parameter: stat index, power type, school mask or
    /// rating bitmask
    #[serde(default)]
    pub misc_value: i32,
}

/// Spell effect lookup
pub trait SpellSource {
    /// Effects of a spell, or None if the spell is unknown
    fn spell_effects(&self, spell: SpellId) -> Option<&[SpellEffect]>;
}

/// Result of mapping one spell effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectMapping {
    /// Scored under these keys (deduplicated, in key order)
    Mapped(Vec<AttributeKey>),
    /// Known aura with nothing worth scoring
    Unscored,
    /// Aura kind not in the table
    Unhandled,
}

const BASE_STATS: [AttributeKey; 5] = [
    AttributeKey::Strength,
    AttributeKey::Agility,
    AttributeKey::Stamina,
    AttributeKey::Intellect,
    AttributeKey::Spirit,
];

/// Mana power type for power regen auras
const POWER_MANA: i32 = 0;
/// Physical school bit for resistance auras
const SCHOOL_MASK_PHYSICAL: i32 = 1;

/// Map an on-equip aura into attribute keys
pub fn map_effect(effect: &SpellEffect) -> EffectMapping {
    let single = |key| EffectMapping::Mapped(vec![key]);

    match effect.aura {
        AuraKind::ModRating => {
            let mut keys: Vec<AttributeKey> = CombatRating::from_mask(effect.misc_value as u32)
                .filter_map(CombatRating::attribute)
                .collect();
            keys.sort();
            keys.dedup();
            if keys.is_empty() {
                EffectMapping::Unscored
            } else {
                EffectMapping::Mapped(keys)
            }
        }
        AuraKind::ModStat => match effect.misc_value {
            -1 => EffectMapping::Mapped(BASE_STATS.to_vec()),
            idx @ 0..=4 => single(BASE_STATS[idx as usize]),
            _ => EffectMapping::Unscored,
        },
        AuraKind::ModAttackPower => single(AttributeKey::AttackPower),
        AuraKind::ModDamageDone | AuraKind::ModHealingDone => single(AttributeKey::SpellPower),
        AuraKind::ModPowerRegen => {
            if effect.misc_value == POWER_MANA {
                single(AttributeKey::ManaRegen)
            } else {
                EffectMapping::Unscored
            }
        }
        AuraKind::ModRegen => single(AttributeKey::HealthRegen),
        AuraKind::ModShieldBlockValue => single(AttributeKey::BlockValue),
        AuraKind::ModResistance => {
            if effect.misc_value & SCHOOL_MASK_PHYSICAL != 0 {
                single(AttributeKey::Armor)
            } else {
                EffectMapping::Unscored
            }
        }
        AuraKind::ProcTriggerSpell
        | AuraKind::ModDamageDoneCreature
        | AuraKind::ModMeleeAttackPowerVersus
        | AuraKind::ModRangedAttackPowerVersus
        | AuraKind::ModFlatSpellDamageVersus
        | AuraKind::Dummy
        | AuraKind::ModSkill
        | AuraKind::ModIncreaseSpeed
        | AuraKind::ModIncreaseMountedSpeed
        | AuraKind::WaterBreathing
        | AuraKind::DamageShield
        | AuraKind::ModRangedAttackPower
        | AuraKind::ModIncreaseHealth => EffectMapping::Unscored,
        AuraKind::Other(_) => EffectMapping::Unhandled,
    }
}

/// Attribute an item stat line is scored under
pub fn attribute_for_stat(stat: StatKind) -> Option<AttributeKey> {
    use StatKind::*;
    let key = match stat {
        Agility => AttributeKey::Agility,
        Strength => AttributeKey::Strength,
        Intellect => AttributeKey::Intellect,
        Spirit => AttributeKey::Spirit,
        Stamina => AttributeKey::Stamina,
        DefenseSkillRating => AttributeKey::DefenseRating,
        DodgeRating => AttributeKey::DodgeRating,
        ParryRating => AttributeKey::ParryRating,
        BlockRating => AttributeKey::BlockRating,
        HitMeleeRating | HitRangedRating | HitSpellRating | HitRating => AttributeKey::HitRating,
        CritMeleeRating | CritRangedRating | CritSpellRating | CritRating => AttributeKey::CritRating,
        HasteMeleeRating | HasteRangedRating | HasteSpellRating | HasteRating => AttributeKey::HasteRating,
        ExpertiseRating => AttributeKey::ExpertiseRating,
        ArmorPenetrationRating => AttributeKey::ArmorPenetrationRating,
        AttackPower => AttributeKey::AttackPower,
        SpellHealingDone | SpellDamageDone | SpellPower => AttributeKey::SpellPower,
        ManaRegeneration => AttributeKey::ManaRegen,
        HealthRegen => AttributeKey::HealthRegen,
        BlockValue => AttributeKey::BlockValue,
        Mana | Health | HitTakenRating | CritTakenRating | ResilienceRating | RangedAttackPower
        | FeralAttackPower | SpellPenetration | Other(_) => return None,
    };
    Some(key)
}
