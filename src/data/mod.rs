//! Data loading
//!
//! Game tables read from RON files in a data directory.

pub mod defs;
pub mod loader;

pub use defs::{ItemDefs, SpellDef, SpellDefs, EnchantGroupDef, EnchantGroupEntry, EnchantmentDefs};
pub use loader::GameData;
