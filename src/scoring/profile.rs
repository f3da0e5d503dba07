//! Weight profiles
//!
//! One immutable attribute-weight table per character archetype, and the
//! rules that pick an archetype for a character.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::attribute::AttributeKey;
use crate::character::{Character, Class};
use crate::items::EquipmentSlot;

/// Druids below this level play as casters
const DRUID_FERAL_LEVEL: u8 = 10;

/// Role a weight profile is tuned for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Two-handed strength melee; also the fallback
    Retribution,
    /// Shield tank
    Protection,
    /// Dual-wield strength melee
    Fury,
    /// Hit/haste caster
    Frost,
    /// Ranged physical
    BeastMastery,
    /// Nature caster (low-level druids)
    Balance,
    /// Agility melee
    Feral,
    /// Elemental/enhancement hybrid
    Enhancement,
    /// Shadow caster
    Shadow,
}

impl Archetype {
    pub const DEFAULT: Archetype = Archetype::Retribution;

    pub fn all() -> &'static [Archetype] {
        &[
            Archetype::Retribution,
            Archetype::Protection,
            Archetype::Fury,
            Archetype::Frost,
            Archetype::BeastMastery,
            Archetype::Balance,
            Archetype::Feral,
            Archetype::Enhancement,
            Archetype::Shadow,
        ]
    }

    /// Pick the archetype for a character's class and current state
    pub fn for_character(character: &dyn Character) -> Archetype {
        match character.class() {
            Class::Paladin => {
                if character.equipped(EquipmentSlot::OffHand).is_some() {
                    Archetype::Protection
                } else {
                    Archetype::Retribution
                }
            }
            Class::Warrior => Archetype::Fury,
            Class::Mage => Archetype::Frost,
            Class::Hunter => Archetype::BeastMastery,
            Class::Druid => {
                if character.level() < DRUID_FERAL_LEVEL {
                    Archetype::Balance
                } else {
                    Archetype::Feral
                }
            }
            Class::Shaman => Archetype::Enhancement,
            Class::Priest | Class::Warlock => Archetype::Shadow,
            Class::Rogue => Archetype::Feral,
            Class::DeathKnight => Archetype::DEFAULT,
        }
    }
}

/// Immutable attribute weights for one archetype
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightProfile {
    pub archetype: Archetype,
    weights: BTreeMap<AttributeKey, f64>,
}

impl WeightProfile {
    pub fn new(archetype: Archetype, weights: impl IntoIterator<Item = (AttributeKey, f64)>) -> Self {
        Self {
            archetype,
            weights: weights.into_iter().collect(),
        }
    }

    /// Weight of a key, if the profile weights it at all
    pub fn weight(&self, key: AttributeKey) -> Option<f64> {
        self.weights.get(&key).copied()
    }

    /// Sum of all weights; the normalization denominator
    pub fn total_weight(&self) -> f64 {
        self.weights.values().sum()
    }

    pub fn weights(&self) -> impl Iterator<Item = (AttributeKey, f64)> + '_ {
        self.weights.iter().map(|(k, w)| (*k, *w))
    }

    /// Check the profile can be used as a scoring denominator
    pub fn validate(&self) -> Result<(), String> {
        if let Some((key, w)) = self.weights().find(|(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(format!("{:?}: invalid weight {} for {}", self.archetype, w, key.name()));
        }
        if self.total_weight() <= 0.0 {
            return Err(format!("{:?}: total weight is zero", self.archetype));
        }
        Ok(())
    }
}
