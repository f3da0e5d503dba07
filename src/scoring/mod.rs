//! Item scoring
//!
//! Weight profiles, the stat/aura normalizer, the random enchantment
//! optimizer and the scorer that combines them.

pub mod attribute;
pub mod profile;
pub mod registry;
pub mod effects;
pub mod enchant;
pub mod engine;

pub use attribute::AttributeKey;
pub use profile::{Archetype, WeightProfile};
pub use registry::{ProfileRegistry, ProfileDefs, default_profiles, export_default_profiles};
pub use effects::{AuraKind, CombatRating, SpellEffect, SpellSource, EffectMapping, map_effect, attribute_for_stat};
pub use enchant::{EnchantmentSource, EnchantRoller, EnchantmentCache, EnchantmentChoice, best_enchant, enchantment_score};
pub use engine::Scorer;
