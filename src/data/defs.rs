//! Data file layouts
//!
//! What `items.ron`, `spells.ron` and `enchantments.ron` contain.

use serde::{Deserialize, Serialize};

use crate::items::{EnchantmentId, ItemRecord, RandomEnchantGroup, RandomEnchantment, SpellId};
use crate::scoring::SpellEffect;

/// Contents of `items.ron`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemDefs {
    pub items: Vec<ItemRecord>,
}

/// A spell and its aura effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellDef {
    pub id: SpellId,
    #[serde(default)]
    pub name: String,
    pub effects: Vec<SpellEffect>,
}

/// Contents of `spells.ron`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpellDefs {
    pub spells: Vec<SpellDef>,
}

/// One rollable entry of an enchantment group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnchantGroupEntry {
    pub id: EnchantmentId,
    /// Drop chance in percent
    pub chance: f32,
}

/// An enchantment group and what it can roll
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnchantGroupDef {
    pub group: RandomEnchantGroup,
    pub entries: Vec<EnchantGroupEntry>,
}

/// Contents of `enchantments.ron`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnchantmentDefs {
    pub enchantments: Vec<RandomEnchantment>,
    #[serde(default)]
    pub groups: Vec<EnchantGroupDef>,
}
