//! RON data loader
//!
//! Loads the item, spell and enchantment tables from a data directory and
//! serves them through the engine's lookup traits.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use parking_lot::Mutex;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::de::DeserializeOwned;

use super::defs::{EnchantGroupDef, EnchantGroupEntry, EnchantmentDefs, ItemDefs, SpellDefs};
use crate::error::Result;
use crate::items::{
    CatalogQuery, EnchantmentId, ItemCatalog, ItemId, ItemRecord, RandomEnchantGroup, RandomEnchantment, SpellId,
};
use crate::scoring::{EnchantRoller, EnchantmentSource, SpellEffect, SpellSource};

/// In-memory game tables
pub struct GameData {
    items: BTreeMap<ItemId, ItemRecord>,
    spells: HashMap<SpellId, Vec<SpellEffect>>,
    enchantments: HashMap<EnchantmentId, RandomEnchantment>,
    groups: HashMap<RandomEnchantGroup, Vec<EnchantGroupEntry>>,
    rng: Mutex<StdRng>,
}

impl GameData {
    /// Load all tables from `dir`
    ///
    /// `items.ron` must exist; missing or broken spell and enchantment files
    /// leave those tables empty.
    pub fn load(dir: &Path) -> Result<Self> {
        let content = fs::read_to_string(dir.join("items.ron"))?;
        let items: ItemDefs = ron::from_str(&content)?;
        let spells: SpellDefs = load_optional(dir, "spells.ron");
        let enchantments: EnchantmentDefs = load_optional(dir, "enchantments.ron");

        let data = Self::from_defs(items, spells, enchantments);
        log::info!(
            "Loaded {} items, {} spells, {} enchantments in {} groups from {}",
            data.items.len(),
            data.spells.len(),
            data.enchantments.len(),
            data.groups.len(),
            dir.display()
        );
        Ok(data)
    }

    /// Build the tables from parsed definitions
    pub fn from_defs(items: ItemDefs, spells: SpellDefs, enchantments: EnchantmentDefs) -> Self {
        let mut data = Self::default();
        for item in items.items {
            data.insert_item(item);
        }
        for spell in spells.spells {
            data.insert_spell(spell.id, spell.effects);
        }
        for enchantment in enchantments.enchantments {
            data.insert_enchantment(enchantment);
        }
        for group in enchantments.groups {
            data.insert_group(group);
        }
        data
    }

    /// Reseed the roller (for reproducible runs)
    pub fn with_seed(self, seed: u64) -> Self {
        *self.rng.lock() = StdRng::seed_from_u64(seed);
        self
    }

    pub fn insert_item(&mut self, item: ItemRecord) {
        if let Some(old) = self.items.insert(item.id, item) {
            log::warn!("Duplicate item {} ({}), keeping the later entry", old.id, old.name);
        }
    }

    pub fn insert_spell(&mut self, id: SpellId, effects: Vec<SpellEffect>) {
        if self.spells.insert(id, effects).is_some() {
            log::warn!("Duplicate spell {}, keeping the later entry", id);
        }
    }

    pub fn insert_enchantment(&mut self, enchantment: RandomEnchantment) {
        if let Some(old) = self.enchantments.insert(enchantment.id, enchantment) {
            log::warn!("Duplicate enchantment {}, keeping the later entry", old.id);
        }
    }

    pub fn insert_group(&mut self, def: EnchantGroupDef) {
        self.groups.entry(def.group).or_default().extend(def.entries);
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for GameData {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
            spells: HashMap::new(),
            enchantments: HashMap::new(),
            groups: HashMap::new(),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}

/// Load an optional RON file, falling back to its default
fn load_optional<T: DeserializeOwned + Default>(dir: &Path, name: &str) -> T {
    let path = dir.join(name);
    if path.exists() {
        match fs::read_to_string(&path) {
            Ok(content) => match ron::from_str(&content) {
                Ok(defs) => return defs,
                Err(e) => log::warn!("Failed to parse {}: {}", name, e),
            },
            Err(e) => log::warn!("Failed to read {}: {}", name, e),
        }
    } else {
        log::warn!("{} not found in {}", name, dir.display());
    }
    T::default()
}

impl ItemCatalog for GameData {
    fn item(&self, id: ItemId) -> Option<&ItemRecord> {
        self.items.get(&id)
    }

    fn query(&self, query: &CatalogQuery, level: u8) -> Vec<ItemId> {
        self.items
            .values()
            .filter(|item| query.matches(item, level))
            .map(|item| item.id)
            .collect()
    }
}

impl SpellSource for GameData {
    fn spell_effects(&self, spell: SpellId) -> Option<&[SpellEffect]> {
        self.spells.get(&spell).map(Vec::as_slice)
    }
}

impl EnchantmentSource for GameData {
    fn group_options(&self, group: RandomEnchantGroup) -> Vec<EnchantmentId> {
        self.groups
            .get(&group)
            .map(|entries| entries.iter().map(|e| e.id).collect())
            .unwrap_or_default()
    }

    fn enchantment(&self, id: EnchantmentId) -> Option<&RandomEnchantment> {
        self.enchantments.get(&id)
    }

    fn groups(&self) -> Vec<RandomEnchantGroup> {
        self.groups.keys().copied().collect()
    }
}

impl EnchantRoller for GameData {
    /// Roll an enchantment from the item's group by drop chance
    fn roll_enchantment(&self, item: &ItemRecord) -> Option<EnchantmentId> {
        let entries = self.groups.get(&item.random_enchant?.group())?;
        let dist = WeightedIndex::new(entries.iter().map(|e| e.chance.max(0.0))).ok()?;
        let idx = dist.sample(&mut *self.rng.lock());
        Some(entries[idx].id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{ArmorSubclass, InventoryType, ItemKind, Quality, RandomEnchantSlot, WeaponSubclass};

    fn helm(id: ItemId, level: u8) -> ItemRecord {
        let mut item = ItemRecord::new(id, format!("Helm {}", id), ItemKind::Armor(ArmorSubclass::Cloth), InventoryType::Head);
        item.required_level = level;
        item
    }

    #[test]
    fn test_query_filters_by_level_and_quality() {
        let mut data = GameData::default();
        data.insert_item(helm(1, 20));
        data.insert_item(helm(2, 21));
        let mut epic = helm(3, 20);
        epic.quality = Quality::Epic;
        data.insert_item(epic);
        let mut bag = helm(4, 20);
        bag.kind = ItemKind::Other { class: 1, subclass: 0 };
        data.insert_item(bag);

        assert_eq!(data.query(&CatalogQuery::default(), 20), vec![1]);
    }

    #[test]
    fn test_roller_picks_from_group() {
        let mut data = GameData::default().with_seed(7);
        data.insert_group(EnchantGroupDef {
            group: RandomEnchantGroup::Property(3),
            entries: vec![
                EnchantGroupEntry { id: EnchantmentId::Property(30), chance: 0.0 },
                EnchantGroupEntry { id: EnchantmentId::Property(31), chance: 25.0 },
            ],
        });
        let mut sword = ItemRecord::new(9, "Sword", ItemKind::Weapon(WeaponSubclass::Sword), InventoryType::Weapon);
        assert_eq!(data.roll_enchantment(&sword), None);

        sword.random_enchant = Some(RandomEnchantSlot::Property(3));
        for _ in 0..10 {
            assert_eq!(data.roll_enchantment(&sword), Some(EnchantmentId::Property(31)));
        }

        sword.random_enchant = Some(RandomEnchantSlot::Property(4));
        assert_eq!(data.roll_enchantment(&sword), None);
    }

    #[test]
    fn test_load_from_directory() {
        let dir = std::env::temp_dir().join(format!("gearwise-data-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create dir");

        let items = ItemDefs { items: vec![helm(1, 20), helm(2, 20)] };
        let ron = ron::ser::to_string_pretty(&items, ron::ser::PrettyConfig::default()).expect("serialize");
        fs::write(dir.join("items.ron"), ron).expect("write items");
        fs::write(dir.join("spells.ron"), "broken (").expect("write spells");

        let data = GameData::load(&dir).expect("load data");
        assert_eq!(data.item_count(), 2);
        assert!(data.spell_effects(1).is_none());
        assert!(data.groups().is_empty());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_items_file_is_an_error() {
        let dir = std::env::temp_dir().join(format!("gearwise-empty-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create dir");
        assert!(GameData::load(&dir).is_err());
        let _ = fs::remove_dir_all(&dir);
    }
}
