//! Random enchantment optimizer
//!
//! Finds the best roll an item's random property or suffix group can give
//! under a weight profile. Drop chances are ignored: the optimizer wants the
//! best possible roll, not the expected one.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::effects::attribute_for_stat;
use super::profile::WeightProfile;
use crate::error::GearError;
use crate::items::{EnchantmentId, ItemRecord, RandomEnchantGroup, RandomEnchantment};

/// Enchantment table lookup
pub trait EnchantmentSource {
    /// Enchantment ids a group can roll
    fn group_options(&self, group: RandomEnchantGroup) -> Vec<EnchantmentId>;

    /// Resolve an enchantment id
    fn enchantment(&self, id: EnchantmentId) -> Option<&RandomEnchantment>;

    /// Every group in the table
    fn groups(&self) -> Vec<RandomEnchantGroup>;
}

/// Source of a default enchantment when a group has no usable options
pub trait EnchantRoller {
    fn roll_enchantment(&self, item: &ItemRecord) -> Option<EnchantmentId>;
}

/// Best enchantment found for an item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnchantmentChoice {
    pub id: Option<EnchantmentId>,
    /// Normalized score the enchantment contributes
    pub score: f64,
}

impl EnchantmentChoice {
    pub const NONE: EnchantmentChoice = EnchantmentChoice { id: None, score: 0.0 };
}

/// Resolved enchantment options per group
///
/// Filled lazily on first lookup of a group; `populate` reloads every group
/// up front and `clear` drops everything.
#[derive(Debug, Default)]
pub struct EnchantmentCache {
    groups: RwLock<HashMap<RandomEnchantGroup, Arc<[RandomEnchantment]>>>,
}

impl EnchantmentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a group, loading them on first use
    pub fn options(&self, source: &dyn EnchantmentSource, group: RandomEnchantGroup) -> Arc<[RandomEnchantment]> {
        if let Some(options) = self.groups.read().get(&group) {
            return Arc::clone(options);
        }

        let loaded = resolve_group(source, group);
        Arc::clone(self.groups.write().entry(group).or_insert(loaded))
    }

    /// Reload every group the source knows about
    pub fn populate(&self, source: &dyn EnchantmentSource) -> usize {
        let table: HashMap<_, _> = source
            .groups()
            .into_iter()
            .map(|group| (group, resolve_group(source, group)))
            .collect();
        let count = table.len();
        *self.groups.write() = table;
        log::debug!("Enchantment cache populated with {} groups", count);
        count
    }

    pub fn clear(&self) {
        self.groups.write().clear();
    }

    /// Number of groups currently cached
    pub fn len(&self) -> usize {
        self.groups.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn resolve_group(source: &dyn EnchantmentSource, group: RandomEnchantGroup) -> Arc<[RandomEnchantment]> {
    source
        .group_options(group)
        .into_iter()
        .filter_map(|id| {
            let found = source.enchantment(id).cloned();
            if found.is_none() {
                let err = GearError::DataInconsistency(format!("{:?} references unknown enchantment {}", group, id));
                log::warn!("{}", err);
            }
            found
        })
        .collect()
}

/// Normalized score of one enchantment on an item with `suffix_factor`
pub fn enchantment_score(profile: &WeightProfile, enchantment: &RandomEnchantment, suffix_factor: u32) -> f64 {
    let total = profile.total_weight();
    if total <= 0.0 {
        return 0.0;
    }
    enchantment
        .stat_amounts(suffix_factor)
        .filter_map(|(stat, value)| {
            let weight = profile.weight(attribute_for_stat(stat)?)?;
            Some(f64::from(value) * weight / total)
        })
        .sum()
}

/// Pick the enchantment that scores highest on `item` under `profile`
///
/// Ties keep the first option. A group with no usable options falls back to
/// the roller's default with a zero score.
pub fn best_enchant(
    profile: &WeightProfile,
    item: &ItemRecord,
    cache: &EnchantmentCache,
    source: &dyn EnchantmentSource,
    roller: &dyn EnchantRoller,
) -> EnchantmentChoice {
    let Some(slot) = item.random_enchant else {
        return EnchantmentChoice::NONE;
    };

    let options = cache.options(source, slot.group());
    let mut best: Option<EnchantmentChoice> = None;
    for option in options.iter() {
        let score = enchantment_score(profile, option, slot.suffix_factor());
        if best.map_or(true, |b| score > b.score) {
            best = Some(EnchantmentChoice { id: Some(option.id), score });
        }
    }

    best.unwrap_or_else(|| {
        log::warn!("{}", GearError::DataInconsistency(format!(
            "item {} has no usable enchantments in {:?}",
            item.id,
            slot.group()
        )));
        EnchantmentChoice { id: roller.roll_enchantment(item), score: 0.0 }
    })
}
