//! Item scoring
//!
//! One normalized score per (item, profile) pair. Every term is a weighted
//! attribute amount divided by the profile's total weight, so scores from the
//! same profile are directly comparable.

use super::attribute::AttributeKey;
use super::effects::{attribute_for_stat, map_effect, EffectMapping, SpellSource};
use super::enchant::{
    best_enchant, enchantment_score, EnchantRoller, EnchantmentCache, EnchantmentChoice, EnchantmentSource,
};
use super::profile::WeightProfile;
use crate::error::GearError;
use crate::items::{EnchantmentId, ItemRecord};

/// Scores items against weight profiles
pub struct Scorer<'a> {
    spells: &'a dyn SpellSource,
    enchantments: &'a dyn EnchantmentSource,
    roller: &'a dyn EnchantRoller,
    cache: &'a EnchantmentCache,
}

impl<'a> Scorer<'a> {
    pub fn new(
        spells: &'a dyn SpellSource,
        enchantments: &'a dyn EnchantmentSource,
        roller: &'a dyn EnchantRoller,
        cache: &'a EnchantmentCache,
    ) -> Self {
        Self { spells, enchantments, roller, cache }
    }

    /// Normalized score of an item
    pub fn score(&self, profile: &WeightProfile, item: &ItemRecord) -> f64 {
        self.score_item(profile, item).0
    }

    /// Score of an item together with the enchantment that earns it
    pub fn score_item(&self, profile: &WeightProfile, item: &ItemRecord) -> (f64, Option<EnchantmentId>) {
        let enchant = self.best_enchant(profile, item);
        let score = self.base_score(profile, item) + enchant.score;
        log::debug!(
            "{} ({}) scores {:.3} under {:?}",
            item.name,
            item.id,
            score,
            profile.archetype
        );
        (score, enchant.id)
    }

    /// Score an owned item with the enchantment it actually rolled
    pub fn score_instance(&self, profile: &WeightProfile, item: &ItemRecord, enchantment: Option<EnchantmentId>) -> f64 {
        let mut score = self.base_score(profile, item);
        if let (Some(id), Some(slot)) = (enchantment, item.random_enchant) {
            match self.enchantments.enchantment(id) {
                Some(e) => score += enchantment_score(profile, e, slot.suffix_factor()),
                None => log::warn!("{}", GearError::DataInconsistency(format!("item {} carries unknown enchantment {}", item.id, id))),
            }
        }
        score
    }

    /// Every term except the enchantment
    fn base_score(&self, profile: &WeightProfile, item: &ItemRecord) -> f64 {
        let total = profile.total_weight();
        if total <= 0.0 {
            return 0.0;
        }
        let weighted = |key: AttributeKey, amount: f64| profile.weight(key).map(|w| amount * w / total);

        let mut score = 0.0;

        if item.block > 0 {
            score += weighted(AttributeKey::BlockValue, f64::from(item.block)).unwrap_or(0.0);
        }

        if item.kind.is_weapon() {
            let dps = item.dps();
            if dps > 0.0 {
                let key = if item.inventory_type.is_ranged() {
                    AttributeKey::RangedDps
                } else {
                    AttributeKey::MeleeDps
                };
                score += weighted(key, dps).unwrap_or(0.0);
            }
        }

        if item.armor > 0 {
            score += weighted(AttributeKey::Armor, f64::from(item.armor)).unwrap_or(0.0);
        }

        for stat in item.base_stats() {
            if stat.value <= 0 {
                continue;
            }
            if let Some(key) = attribute_for_stat(stat.stat) {
                score += weighted(key, f64::from(stat.value)).unwrap_or(0.0);
            }
        }

        score + self.spell_score(profile, item, total)
    }

    /// Best random enchantment for an item under a profile
    pub fn best_enchant(&self, profile: &WeightProfile, item: &ItemRecord) -> EnchantmentChoice {
        best_enchant(profile, item, self.cache, self.enchantments, self.roller)
    }

    fn spell_score(&self, profile: &WeightProfile, item: &ItemRecord, total: f64) -> f64 {
        let mut score = 0.0;
        for spell in item.on_equip_spells() {
            let Some(effects) = self.spells.spell_effects(spell) else {
                log::warn!("{}", GearError::DataInconsistency(format!("item {} references unknown spell {}", item.id, spell)));
                continue;
            };
            for effect in effects {
                match map_effect(effect) {
                    EffectMapping::Mapped(keys) => {
                        for key in keys {
                            if let Some(w) = profile.weight(key) {
                                score += f64::from(effect.amount) * w / total;
                            }
                        }
                    }
                    EffectMapping::Unscored => {}
                    EffectMapping::Unhandled => {
                        log::warn!("Unhandled aura {:?} on spell {} (item {})", effect.aura, spell, item.id);
                    }
                }
            }
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::GameData;
    use crate::items::{
        ArmorSubclass, InventoryType, ItemKind, ItemSpell, ItemStat, SpellTrigger, StatKind, WeaponSubclass,
    };
    use crate::scoring::{Archetype, AuraKind, SpellEffect};

    fn mace() -> ItemRecord {
        let mut item = ItemRecord::new(1, "Mace", ItemKind::Weapon(WeaponSubclass::Mace), InventoryType::Weapon);
        item.min_damage = 10.0;
        item.max_damage = 20.0;
        item.delay = 2.0;
        item
    }

    fn score(data: &GameData, profile: &WeightProfile, item: &ItemRecord) -> f64 {
        let cache = EnchantmentCache::new();
        Scorer::new(data, data, data, &cache).score(profile, item)
    }

    #[test]
    fn test_weapon_dps_alone() {
        let data = GameData::default();
        let only_dps = WeightProfile::new(Archetype::Retribution, [(AttributeKey::MeleeDps, 100.0)]);
        assert!((score(&data, &only_dps, &mace()) - 7500.0).abs() < 1e-9);

        let mixed = WeightProfile::new(
            Archetype::Retribution,
            [(AttributeKey::MeleeDps, 1.0), (AttributeKey::Stamina, 99.0)],
        );
        assert!((score(&data, &mixed, &mace()) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_ranged_weapon_uses_ranged_key() {
        let data = GameData::default();
        let mut bow = mace();
        bow.kind = ItemKind::Weapon(WeaponSubclass::Bow);
        bow.inventory_type = InventoryType::RangedRight;

        let melee = WeightProfile::new(Archetype::Retribution, [(AttributeKey::MeleeDps, 1.0)]);
        assert_eq!(score(&data, &melee, &bow), 0.0);

        let ranged = WeightProfile::new(Archetype::BeastMastery, [(AttributeKey::RangedDps, 1.0)]);
        assert!((score(&data, &ranged, &bow) - 7500.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_weapon_has_no_dps_term() {
        let data = GameData::default();
        let mut chest = mace();
        chest.kind = ItemKind::Armor(ArmorSubclass::Cloth);
        chest.inventory_type = InventoryType::Chest;

        let profile = WeightProfile::new(Archetype::Retribution, [(AttributeKey::MeleeDps, 1.0)]);
        assert_eq!(score(&data, &profile, &chest), 0.0);
    }

    #[test]
    fn test_zero_delay_weapon_skips_dps() {
        let data = GameData::default();
        let mut broken = mace();
        broken.delay = 0.0;
        let profile = WeightProfile::new(Archetype::Retribution, [(AttributeKey::MeleeDps, 1.0)]);
        assert_eq!(score(&data, &profile, &broken), 0.0);
    }

    #[test]
    fn test_non_positive_stats_are_ignored() {
        let data = GameData::default();
        let profile = WeightProfile::new(
            Archetype::Fury,
            [(AttributeKey::Strength, 50.0), (AttributeKey::Agility, 50.0)],
        );
        let mut ring = ItemRecord::new(2, "Ring", ItemKind::Armor(ArmorSubclass::Miscellaneous), InventoryType::Finger);
        ring.stats = vec![ItemStat { stat: StatKind::Strength, value: 10 }];
        let base = score(&data, &profile, &ring);
        assert!((base - 5.0).abs() < 1e-9);

        ring.stats.push(ItemStat { stat: StatKind::Agility, value: -8 });
        ring.stats.push(ItemStat { stat: StatKind::Agility, value: 0 });
        assert_eq!(score(&data, &profile, &ring), base);

        ring.stats.push(ItemStat { stat: StatKind::Agility, value: 4 });
        assert!(score(&data, &profile, &ring) > base);
    }

    #[test]
    fn test_block_and_armor_terms() {
        let data = GameData::default();
        let profile = WeightProfile::new(
            Archetype::Protection,
            [(AttributeKey::BlockValue, 6.0), (AttributeKey::Armor, 4.0)],
        );
        let mut shield = ItemRecord::new(3, "Shield", ItemKind::Armor(ArmorSubclass::Shield), InventoryType::Shield);
        shield.block = 10;
        shield.armor = 100;
        shield.stats = vec![ItemStat { stat: StatKind::BlockValue, value: 5 }];

        // flat block 10*0.6 + block stat 5*0.6 + armor 100*0.4
        assert!((score(&data, &profile, &shield) - 49.0).abs() < 1e-9);
    }

    #[test]
    fn test_unweighted_aura_contributes_nothing() {
        let mut data = GameData::default();
        data.insert_spell(
            9001,
            vec![SpellEffect { aura: AuraKind::ModRating, amount: 12, misc_value: 1 << 2 }],
        );
        let mut cloak = ItemRecord::new(4, "Cloak", ItemKind::Armor(ArmorSubclass::Cloth), InventoryType::Cloak);
        cloak.spells = vec![ItemSpell { spell: 9001, trigger: SpellTrigger::OnEquip }];

        let caster = WeightProfile::new(Archetype::Frost, [(AttributeKey::SpellPower, 1.0)]);
        assert_eq!(score(&data, &caster, &cloak), 0.0);

        let tank = WeightProfile::new(
            Archetype::Protection,
            [(AttributeKey::DodgeRating, 1.0), (AttributeKey::Stamina, 1.0)],
        );
        assert!((score(&data, &tank, &cloak) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_only_on_equip_spells_count() {
        let mut data = GameData::default();
        data.insert_spell(
            9002,
            vec![SpellEffect { aura: AuraKind::ModAttackPower, amount: 40, misc_value: 0 }],
        );
        let mut trinket = ItemRecord::new(5, "Trinket", ItemKind::Armor(ArmorSubclass::Miscellaneous), InventoryType::Trinket);
        trinket.spells = vec![ItemSpell { spell: 9002, trigger: SpellTrigger::OnUse }];

        let profile = WeightProfile::new(Archetype::Fury, [(AttributeKey::AttackPower, 1.0)]);
        assert_eq!(score(&data, &profile, &trinket), 0.0);

        trinket.spells[0].trigger = SpellTrigger::OnEquip;
        assert!((score(&data, &profile, &trinket) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_aura_adds_nothing() {
        let mut data = GameData::default();
        data.insert_spell(
            9003,
            vec![
                SpellEffect { aura: AuraKind::Other(999), amount: 500, misc_value: 0 },
                SpellEffect { aura: AuraKind::ModAttackPower, amount: 40, misc_value: 0 },
            ],
        );
        let mut trinket = ItemRecord::new(6, "Idol of Odd Things", ItemKind::Armor(ArmorSubclass::Miscellaneous), InventoryType::Trinket);
        trinket.spells = vec![ItemSpell { spell: 9003, trigger: SpellTrigger::OnEquip }];

        let profile = WeightProfile::new(
            Archetype::Fury,
            [(AttributeKey::AttackPower, 1.0), (AttributeKey::Strength, 1.0)],
        );
        assert!((score(&data, &profile, &trinket) - 20.0).abs() < 1e-9);
    }
}
