//! Upgrade decisions
//!
//! Buckets held and candidate items, picks upgrades, and hands them to the
//! character's storage.

pub mod buckets;
pub mod selector;
pub mod run;

pub use buckets::{ScoredItem, SlotBuckets};
pub use selector::{select_upgrades, AcquisitionDecision, SlotPosition};
pub use run::{UpgradeEngine, RunReport, UpgradeEntry};
