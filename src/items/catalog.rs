//! Item catalog access
//!
//! The host's item table: record lookup and the candidate query.

use serde::{Deserialize, Serialize};

use super::item::{ItemId, ItemRecord, Quality};

/// Item classes the candidate query can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogClass {
    Weapon,
    Armor,
}

/// Constraints for the candidate query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Item classes to include
    pub classes: Vec<CatalogClass>,
    /// Highest quality to include
    pub max_quality: Quality,
    /// Items at or above this item level are excluded
    pub item_level_below: u16,
    /// Items carrying any of these extra flags are excluded
    pub excluded_flags_extra: u32,
    /// Exclude items requiring faction reputation
    pub no_reputation_requirement: bool,
    /// Only items that sell for something
    pub sellable_only: bool,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            classes: vec![CatalogClass::Weapon, CatalogClass::Armor],
            max_quality: Quality::Rare,
            item_level_below: 200,
            excluded_flags_extra: 8192,
            no_reputation_requirement: true,
            sellable_only: true,
        }
    }
}

impl CatalogQuery {
    /// Check a record against the query for a character level
    pub fn matches(&self, item: &ItemRecord, level: u8) -> bool {
        let class_ok = self.classes.iter().any(|class| match class {
            CatalogClass::Weapon => item.kind.is_weapon(),
            CatalogClass::Armor => item.kind.is_armor(),
        });

        class_ok
            && item.quality <= self.max_quality
            && item.item_level < self.item_level_below
            && item.flags_extra & self.excluded_flags_extra == 0
            && (!self.no_reputation_requirement || item.required_reputation_faction == 0)
            && (!self.sellable_only || item.sell_price > 0)
            && item.required_level == level
    }
}

/// Read access to the item table
pub trait ItemCatalog {
    /// Look up a record by template ID
    fn item(&self, id: ItemId) -> Option<&ItemRecord>;

    /// IDs of items matching the query for a character level
    fn query(&self, query: &CatalogQuery, level: u8) -> Vec<ItemId>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{ArmorSubclass, InventoryType, ItemKind, WeaponSubclass};

    fn helm(level: u8) -> ItemRecord {
        let mut item = ItemRecord::new(10, "Helm", ItemKind::Armor(ArmorSubclass::Mail), InventoryType::Head);
        item.required_level = level;
        item.quality = Quality::Uncommon;
        item.item_level = 30;
        item
    }

    #[test]
    fn test_query_matches_level_exactly() {
        let query = CatalogQuery::default();
        assert!(query.matches(&helm(25), 25));
        assert!(!query.matches(&helm(24), 25));
    }

    #[test]
    fn test_query_filters() {
        let query = CatalogQuery::default();

        let mut epic = helm(25);
        epic.quality = Quality::Epic;
        assert!(!query.matches(&epic, 25));

        let mut flagged = helm(25);
        flagged.flags_extra = 8192;
        assert!(!query.matches(&flagged, 25));

        let mut reputation = helm(25);
        reputation.required_reputation_faction = 1012;
        assert!(!query.matches(&reputation, 25));

        let mut unsellable = helm(25);
        unsellable.sell_price = 0;
        assert!(!query.matches(&unsellable, 25));

        let mut high = helm(25);
        high.item_level = 200;
        assert!(!query.matches(&high, 25));
    }

    #[test]
    fn test_query_classes() {
        let mut query = CatalogQuery::default();
        query.classes = vec![CatalogClass::Weapon];

        let mut axe = ItemRecord::new(11, "Axe", ItemKind::Weapon(WeaponSubclass::Axe), InventoryType::Weapon);
        axe.required_level = 25;
        assert!(query.matches(&axe, 25));
        assert!(!query.matches(&helm(25), 25));

        let potion = {
            let mut p = ItemRecord::new(12, "Potion", ItemKind::Other { class: 0, subclass: 1 }, InventoryType::NonEquip);
            p.required_level = 25;
            p
        };
        assert!(!CatalogQuery::default().matches(&potion, 25));
    }
}
