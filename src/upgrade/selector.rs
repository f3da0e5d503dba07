//! Upgrade selection
//!
//! Compares candidate buckets against held buckets slot by slot. Rings,
//! trinkets and (for dual wielders and two-hand specialists) weapons have two
//! positions, so a candidate can also win the second one.

use serde::Serialize;

use super::buckets::{ScoredItem, SlotBuckets};
use crate::character::Character;
use crate::items::{EnchantmentId, InventoryType, ItemRecord};
use crate::rules::{can_dual_wield, is_two_hand_specialist};

/// Which position of a slot a decision fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlotPosition {
    Primary,
    Secondary,
}

/// An item the character should acquire
#[derive(Debug, Clone, Copy)]
pub struct AcquisitionDecision<'a> {
    pub slot: InventoryType,
    pub item: &'a ItemRecord,
    pub score: f64,
    pub enchantment: Option<EnchantmentId>,
    pub position: SlotPosition,
}

impl<'a> AcquisitionDecision<'a> {
    fn new(slot: InventoryType, candidate: &ScoredItem<'a>, position: SlotPosition) -> Self {
        Self {
            slot,
            item: candidate.item,
            score: candidate.score,
            enchantment: candidate.enchantment,
            position,
        }
    }
}

/// Character state that changes how slots are treated
#[derive(Debug, Clone, Copy)]
struct Wielding {
    dual: bool,
    two_hand_specialist: bool,
}

impl Wielding {
    fn of(character: &dyn Character) -> Self {
        Self {
            dual: can_dual_wield(character),
            two_hand_specialist: is_two_hand_specialist(character),
        }
    }

    fn skips(&self, slot: InventoryType) -> bool {
        match slot {
            InventoryType::Shield | InventoryType::WeaponMainHand => self.dual,
            InventoryType::Weapon => self.two_hand_specialist,
            _ => false,
        }
    }

    fn is_double(&self, slot: InventoryType) -> bool {
        match slot {
            InventoryType::Finger | InventoryType::Trinket => true,
            InventoryType::Weapon => self.dual,
            InventoryType::TwoHandWeapon => self.two_hand_specialist,
            _ => false,
        }
    }
}

/// Pick the candidates worth acquiring, in slot order
pub fn select_upgrades<'a>(
    held: &SlotBuckets<'_>,
    candidates: &SlotBuckets<'a>,
    character: &dyn Character,
) -> Vec<AcquisitionDecision<'a>> {
    let wielding = Wielding::of(character);
    let mut decisions = Vec::new();

    for slot in candidates.slots() {
        if wielding.skips(slot) {
            log::debug!("Skipping {} for {}", slot.name(), character.name());
            continue;
        }
        let offered = candidates.get(slot);
        let Some(top) = offered.first() else {
            continue;
        };
        let owned = held.get(slot);

        let primary_won = owned.first().map_or(true, |best| top.score > best.score);
        if primary_won {
            decisions.push(AcquisitionDecision::new(slot, top, SlotPosition::Primary));
        }

        if !wielding.is_double(slot) {
            continue;
        }

        // Second position: beat the item it would sit next to without doubling
        // up on something already in the top two. Once the primary is taken, a
        // lone owned item moves over and becomes the bar.
        let (second, bar) = if primary_won {
            (offered.get(1), owned.get(1).or(owned.first()))
        } else {
            (Some(top), owned.get(1))
        };
        let already_owned = |c: &ScoredItem| owned.iter().take(2).any(|h| h.item.id == c.item.id);
        if let Some(candidate) = second {
            if bar.map_or(true, |h| candidate.score > h.score) && !already_owned(candidate) {
                decisions.push(AcquisitionDecision::new(slot, candidate, SlotPosition::Secondary));
            }
        }
    }

    decisions
}
