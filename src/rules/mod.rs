//! Equip rules
//!
//! Who may wear what, and which bucket an item competes in.

pub mod eligibility;
pub mod slots;

pub use eligibility::{can_use, required_skill, MAIL_LEVEL};
pub use slots::{canonical_slot, can_dual_wield, is_two_hand_specialist};
