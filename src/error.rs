//! Engine errors

use thiserror::Error;

use crate::character::StoreDenial;
use crate::items::ItemId;
use crate::upgrade::RunReport;

#[derive(Error, Debug)]
pub enum GearError {
    #[error("Data inconsistency: {0}")]
    DataInconsistency(String),

    /// `report` lists what was stored before the denial
    #[error("Cannot store item {item}: {reason}")]
    StorageDenied {
        item: ItemId,
        reason: StoreDenial,
        report: Box<RunReport>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] ron::Error),
}

pub type Result<T> = std::result::Result<T, GearError>;
