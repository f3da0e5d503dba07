//! Slot buckets
//!
//! Scored items grouped by canonical slot, best first. One set for what the
//! character holds, one for the catalog candidates; both are rebuilt per run.

use std::collections::BTreeMap;

use crate::character::Character;
use crate::error::GearError;
use crate::items::{EnchantmentId, InventoryType, ItemCatalog, ItemId, ItemRecord};
use crate::rules::{can_use, canonical_slot};
use crate::scoring::{Scorer, WeightProfile};

/// An item with its score under the run's profile
#[derive(Debug, Clone, Copy)]
pub struct ScoredItem<'a> {
    pub item: &'a ItemRecord,
    pub score: f64,
    /// Enchantment the score assumes
    pub enchantment: Option<EnchantmentId>,
}

/// Scored items per canonical slot
#[derive(Debug, Default)]
pub struct SlotBuckets<'a> {
    slots: BTreeMap<InventoryType, Vec<ScoredItem<'a>>>,
}

impl<'a> SlotBuckets<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket everything the character owns and can use
    ///
    /// Owned items are scored with the enchantment they actually carry.
    pub fn held(
        character: &dyn Character,
        catalog: &'a dyn ItemCatalog,
        scorer: &Scorer,
        profile: &WeightProfile,
    ) -> Self {
        let mut buckets = Self::new();
        for held in character.held_items() {
            let Some(item) = catalog.item(held.item) else {
                log::warn!("{}", GearError::DataInconsistency(format!("held item {} is not in the catalog", held.item)));
                continue;
            };
            if !can_use(character, item) {
                continue;
            }
            let slot = canonical_slot(character, item.inventory_type);
            let score = scorer.score_instance(profile, item, held.enchantment);
            buckets.insert(slot, ScoredItem { item, score, enchantment: held.enchantment });
        }
        buckets.sort();
        buckets
    }

    /// Bucket catalog candidates the character can use and does not own yet
    pub fn candidates(
        character: &dyn Character,
        ids: &[ItemId],
        catalog: &'a dyn ItemCatalog,
        scorer: &Scorer,
        profile: &WeightProfile,
        held: &SlotBuckets<'_>,
    ) -> Self {
        let mut buckets = Self::new();
        for &id in ids {
            let Some(item) = catalog.item(id) else {
                log::warn!("{}", GearError::DataInconsistency(format!("catalog returned unknown item {}", id)));
                continue;
            };
            if !can_use(character, item) {
                continue;
            }
            let slot = canonical_slot(character, item.inventory_type);
            if held.contains(slot, item.id) {
                continue;
            }
            let (score, enchantment) = scorer.score_item(profile, item);
            buckets.insert(slot, ScoredItem { item, score, enchantment });
        }
        buckets.sort();
        buckets
    }

    pub fn insert(&mut self, slot: InventoryType, item: ScoredItem<'a>) {
        self.slots.entry(slot).or_default().push(item);
    }

    /// Order every bucket by descending score; ties keep insertion order
    pub fn sort(&mut self) {
        for items in self.slots.values_mut() {
            items.sort_by(|a, b| b.score.total_cmp(&a.score));
        }
    }

    /// Items in a slot, best first
    pub fn get(&self, slot: InventoryType) -> &[ScoredItem<'a>] {
        self.slots.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check if a slot already holds an item with this template
    pub fn contains(&self, slot: InventoryType, id: ItemId) -> bool {
        self.get(slot).iter().any(|s| s.item.id == id)
    }

    /// Slots with at least one item, in slot order
    pub fn slots(&self) -> impl Iterator<Item = InventoryType> + '_ {
        self.slots.iter().filter(|(_, items)| !items.is_empty()).map(|(slot, _)| *slot)
    }

    pub fn len(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
