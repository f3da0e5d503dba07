//! Random enchantment records
//!
//! Random properties and random suffixes rolled onto item instances.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::stats::StatKind;

/// ID of a rollable random enchantment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnchantmentId {
    Property(u32),
    Suffix(u32),
}

impl fmt::Display for EnchantmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Item instances store suffixes as negative ids
        match self {
            EnchantmentId::Property(id) => write!(f, "{}", id),
            EnchantmentId::Suffix(id) => write!(f, "-{}", id),
        }
    }
}

/// Enchantment group an item template points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RandomEnchantGroup {
    Property(u32),
    Suffix(u32),
}

/// How much of a stat an enchantment grants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnchantAmount {
    /// Fixed amount (random properties)
    Flat(i32),
    /// Share of the item's suffix factor, in 1/10000 units (random suffixes)
    Allocation(u32),
}

impl EnchantAmount {
    /// Resolve the amount for an item with the given suffix factor
    pub fn resolve(&self, suffix_factor: u32) -> i32 {
        match *self {
            EnchantAmount::Flat(value) => value,
            EnchantAmount::Allocation(pct) => (u64::from(suffix_factor) * u64::from(pct) / 10_000) as i32,
        }
    }
}

/// One sub-effect of a random enchantment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnchantEffect {
    /// Grants a stat
    Stat { stat: StatKind, amount: EnchantAmount },
    /// Anything else (procs, damage, resistances); never scored
    Other(u32),
}

/// A rollable random enchantment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomEnchantment {
    pub id: EnchantmentId,
    /// Display suffix ("of the Bear")
    pub name: String,
    #[serde(default)]
    pub effects: Vec<EnchantEffect>,
}

impl RandomEnchantment {
    /// Stat sub-effects with their resolved amounts
    pub fn stat_amounts(&self, suffix_factor: u32) -> impl Iterator<Item = (StatKind, i32)> + '_ {
        self.effects.iter().filter_map(move |effect| match effect {
            EnchantEffect::Stat { stat, amount } => Some((*stat, amount.resolve(suffix_factor))),
            EnchantEffect::Other(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_allocation() {
        // 40% of a factor of 51
        assert_eq!(EnchantAmount::Allocation(4000).resolve(51), 20);
        assert_eq!(EnchantAmount::Flat(7).resolve(51), 7);
        assert_eq!(EnchantAmount::Allocation(10_000).resolve(0), 0);
    }

    #[test]
    fn test_stat_amounts_skip_other_effects() {
        let enchant = RandomEnchantment {
            id: EnchantmentId::Suffix(6),
            name: "of the Bear".to_string(),
            effects: vec![
                EnchantEffect::Stat { stat: StatKind::Strength, amount: EnchantAmount::Allocation(5000) },
                EnchantEffect::Other(3),
                EnchantEffect::Stat { stat: StatKind::Stamina, amount: EnchantAmount::Allocation(5000) },
            ],
        };
        let amounts: Vec<_> = enchant.stat_amounts(30).collect();
        assert_eq!(amounts, vec![(StatKind::Strength, 15), (StatKind::Stamina, 15)]);
    }

    #[test]
    fn test_display_suffix_negative() {
        assert_eq!(EnchantmentId::Suffix(12).to_string(), "-12");
        assert_eq!(EnchantmentId::Property(12).to_string(), "12");
    }
}
