//! Gearwise - gear upgrade engine for RPG characters
//!
//! Scores items under class-specific stat weights, resolves the slots they
//! compete for, and picks the upgrades a character should acquire.

pub mod error;
pub mod config;
pub mod items;
pub mod character;
pub mod scoring;
pub mod rules;
pub mod upgrade;
pub mod data;

// Re-export commonly used types
pub use error::{GearError, Result};
pub use config::EngineConfig;
pub use character::{Character, CharacterSheet, ItemStore};
pub use data::GameData;
pub use scoring::{ProfileRegistry, Scorer, EnchantmentCache};
pub use upgrade::{UpgradeEngine, RunReport};
