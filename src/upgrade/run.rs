//! Upgrade runs
//!
//! Wires the pipeline together for one character: profile selection,
//! catalog query, bucketing, selection and finally acquisition.

use serde::Serialize;

use super::buckets::SlotBuckets;
use super::selector::{select_upgrades, AcquisitionDecision, SlotPosition};
use crate::character::{Character, ItemStore};
use crate::config::EngineConfig;
use crate::error::{GearError, Result};
use crate::items::{ItemCatalog, ItemId};
use crate::scoring::{Archetype, EnchantRoller, EnchantmentCache, EnchantmentSource, ProfileRegistry, Scorer, SpellSource};

/// Reportable form of a decision
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpgradeEntry {
    pub slot: String,
    pub item: ItemId,
    pub name: String,
    pub score: f64,
    /// Enchantment id as stored on item instances (suffixes negative)
    pub enchantment: Option<String>,
    pub position: SlotPosition,
}

impl From<&AcquisitionDecision<'_>> for UpgradeEntry {
    fn from(d: &AcquisitionDecision<'_>) -> Self {
        Self {
            slot: d.slot.name().to_string(),
            item: d.item.id,
            name: d.item.name.clone(),
            score: d.score,
            enchantment: d.enchantment.map(|e| e.to_string()),
            position: d.position,
        }
    }
}

/// Outcome of a run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub character: String,
    pub level: u8,
    pub archetype: Archetype,
    /// Everything the selector picked
    pub decisions: Vec<UpgradeEntry>,
    /// Items actually placed in storage
    pub acquired: Vec<UpgradeEntry>,
}

impl RunReport {
    fn empty(character: &dyn Character, archetype: Archetype) -> Self {
        Self {
            character: character.name().to_string(),
            level: character.level(),
            archetype,
            decisions: Vec::new(),
            acquired: Vec::new(),
        }
    }
}

/// The full upgrade pipeline over one set of game tables
pub struct UpgradeEngine<'a, D> {
    data: &'a D,
    profiles: &'a ProfileRegistry,
    cache: &'a EnchantmentCache,
    config: &'a EngineConfig,
}

impl<'a, D> UpgradeEngine<'a, D>
where
    D: ItemCatalog + SpellSource + EnchantmentSource + EnchantRoller,
{
    pub fn new(data: &'a D, profiles: &'a ProfileRegistry, cache: &'a EnchantmentCache, config: &'a EngineConfig) -> Self {
        Self { data, profiles, cache, config }
    }

    /// Decide what the character should acquire, without touching it
    pub fn plan(&self, character: &dyn Character) -> Vec<AcquisitionDecision<'a>> {
        let data: &'a D = self.data;
        let level = character.level();
        if level < self.config.min_character_level {
            log::info!(
                "{} is level {}, below the minimum of {}",
                character.name(),
                level,
                self.config.min_character_level
            );
            return Vec::new();
        }

        let ids = data.query(&self.config.catalog, level);
        if ids.is_empty() {
            log::info!("No catalog items for level {}", level);
            return Vec::new();
        }

        let profile = self.profiles.profile_for(character);
        let scorer = Scorer::new(data, data, data, self.cache);
        let held = SlotBuckets::held(character, data, &scorer, profile);
        let candidates = SlotBuckets::candidates(character, &ids, data, &scorer, profile, &held);
        if candidates.is_empty() {
            log::info!("No eligible candidates for {} among {} catalog items", character.name(), ids.len());
            return Vec::new();
        }

        let decisions = select_upgrades(&held, &candidates, character);
        log::info!(
            "{} ({:?}): {} held, {} candidates, {} upgrades",
            character.name(),
            profile.archetype,
            held.len(),
            candidates.len(),
            decisions.len()
        );
        decisions
    }

    /// Plan and report without acquiring anything
    pub fn preview(&self, character: &dyn Character) -> RunReport {
        let mut report = RunReport::empty(character, Archetype::for_character(character));
        report.decisions = self.plan(character).iter().map(UpgradeEntry::from).collect();
        report
    }

    /// Plan, then store every chosen item on the character
    ///
    /// The first storage denial ends the run with `GearError::StorageDenied`,
    /// which carries the report of everything stored up to that point.
    pub fn run<C>(&self, character: &mut C) -> Result<RunReport>
    where
        C: Character + ItemStore,
    {
        let decisions = self.plan(&*character);
        let mut report = RunReport::empty(&*character, Archetype::for_character(&*character));
        report.decisions = decisions.iter().map(UpgradeEntry::from).collect();

        for decision in &decisions {
            let item = decision.item.id;
            if let Err(reason) = character.store_new_item(item, 1, decision.enchantment) {
                log::warn!(
                    "{} could not store {} ({}): {}; {} item(s) stored before",
                    character.name(),
                    decision.item.name,
                    item,
                    reason,
                    report.acquired.len()
                );
                return Err(GearError::StorageDenied { item, reason, report: Box::new(report) });
            }
            log::info!(
                "{} acquired {} ({}) for {}",
                character.name(),
                decision.item.name,
                decision.item.id,
                decision.slot.name()
            );
            report.acquired.push(UpgradeEntry::from(decision));
        }
        Ok(report)
    }
}
