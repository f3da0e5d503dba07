//! Weight profile registry
//!
//! Holds the profiles for every archetype. Profiles come from `profiles.ron`
//! when present, falling back to the built-in tables.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::attribute::AttributeKey;
use super::profile::{Archetype, WeightProfile};
use crate::character::Character;
use crate::error::Result;

/// Profile file layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileDefs {
    pub profiles: Vec<WeightProfile>,
}

/// Read-only archetype → profile lookup
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: HashMap<Archetype, WeightProfile>,
    fallback: WeightProfile,
}

impl ProfileRegistry {
    /// Build a registry from loaded profiles
    ///
    /// Invalid profiles are replaced by their built-in version, and archetypes
    /// missing from `defs` get the built-in table.
    pub fn from_defs(defs: ProfileDefs) -> Self {
        let builtin = default_profiles();
        let mut profiles: HashMap<Archetype, WeightProfile> = builtin
            .profiles
            .iter()
            .map(|p| (p.archetype, p.clone()))
            .collect();

        for profile in defs.profiles {
            match profile.validate() {
                Ok(()) => {
                    profiles.insert(profile.archetype, profile);
                }
                Err(e) => log::warn!("Ignoring weight profile: {}", e),
            }
        }

        let fallback = profiles
            .get(&Archetype::DEFAULT)
            .cloned()
            .unwrap_or_else(retribution);

        Self { profiles, fallback }
    }

    /// Load profiles from a RON file, falling back to the built-in tables
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match ron::from_str::<ProfileDefs>(&content) {
                    Ok(defs) => {
                        log::info!("Loaded {} weight profiles from {}", defs.profiles.len(), path.display());
                        return Self::from_defs(defs);
                    }
                    Err(e) => log::warn!("Failed to parse {}: {}", path.display(), e),
                },
                Err(e) => log::warn!("Failed to read {}: {}", path.display(), e),
            }
        }
        Self::default()
    }

    /// Profile registered for an archetype (default archetype if none)
    pub fn profile(&self, archetype: Archetype) -> &WeightProfile {
        self.profiles.get(&archetype).unwrap_or(&self.fallback)
    }

    /// Profile that applies to a character right now
    pub fn profile_for(&self, character: &dyn Character) -> &WeightProfile {
        self.profile(Archetype::for_character(character))
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::from_defs(ProfileDefs::default())
    }
}

/// Write the built-in tables to a RON file for editing
pub fn export_default_profiles(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let ron = ron::ser::to_string_pretty(&default_profiles(), ron::ser::PrettyConfig::default())?;
    fs::write(path, ron)?;
    Ok(())
}

fn retribution() -> WeightProfile {
    use AttributeKey::*;
    WeightProfile::new(
        Archetype::Retribution,
        [
            (MeleeDps, 470.0),
            (HitRating, 80.0),
            (Strength, 80.0),
            (ExpertiseRating, 66.0),
            (CritRating, 40.0),
            (AttackPower, 34.0),
            (Agility, 32.0),
            (HasteRating, 30.0),
            (ArmorPenetrationRating, 22.0),
            (SpellPower, 9.0),
            (Stamina, 0.1),
            (Armor, 0.01),
            (RangedDps, 0.0001),
        ],
    )
}

/// Create the built-in profiles (hardcoded fallback)
pub fn default_profiles() -> ProfileDefs {
    use AttributeKey::*;

    ProfileDefs {
        profiles: vec![
            retribution(),
            WeightProfile::new(
                Archetype::Protection,
                [
                    (Stamina, 100.0),
                    (Agility, 60.0),
                    (ExpertiseRating, 59.0),
                    (DodgeRating, 55.0),
                    (DefenseRating, 45.0),
                    (ParryRating, 30.0),
                    (Strength, 16.0),
                    (Armor, 0.01),
                    (BlockRating, 7.0),
                    (BlockValue, 6.0),
                    (MeleeDps, 0.0001),
                    (RangedDps, 0.0001),
                ],
            ),
            WeightProfile::new(
                Archetype::Fury,
                [
                    (ExpertiseRating, 100.0),
                    (Strength, 82.0),
                    (CritRating, 66.0),
                    (Agility, 53.0),
                    (ArmorPenetrationRating, 52.0),
                    (HitRating, 48.0),
                    (HasteRating, 36.0),
                    (AttackPower, 31.0),
                    (Armor, 5.0),
                    (Stamina, 0.1),
                    (MeleeDps, 0.01),
                    (RangedDps, 0.0001),
                ],
            ),
            WeightProfile::new(
                Archetype::Frost,
                [
                    (HitRating, 80.0),
                    (HasteRating, 42.0),
                    (SpellPower, 39.0),
                    (CritRating, 19.0),
                    (Intellect, 6.0),
                    (Stamina, 0.1),
                    (MeleeDps, 0.0001),
                    (Armor, 0.0001),
                    (RangedDps, 0.0001),
                ],
            ),
            WeightProfile::new(
                Archetype::BeastMastery,
                [
                    (RangedDps, 213.0),
                    (HitRating, 80.0),
                    (Agility, 58.0),
                    (CritRating, 40.0),
                    (Intellect, 37.0),
                    (AttackPower, 30.0),
                    (ArmorPenetrationRating, 28.0),
                    (HasteRating, 21.0),
                    (Stamina, 0.1),
                    (MeleeDps, 0.0001),
                    (Armor, 0.0001),
                ],
            ),
            WeightProfile::new(
                Archetype::Balance,
                [
                    (HitRating, 80.0),
                    (SpellPower, 66.0),
                    (HasteRating, 54.0),
                    (CritRating, 43.0),
                    (Spirit, 22.0),
                    (Intellect, 22.0),
                    (Stamina, 0.1),
                    (MeleeDps, 0.0001),
                    (Armor, 0.0001),
                    (RangedDps, 0.0001),
                ],
            ),
            WeightProfile::new(
                Archetype::Feral,
                [
                    (Agility, 100.0),
                    (ArmorPenetrationRating, 90.0),
                    (Strength, 80.0),
                    (CritRating, 55.0),
                    (ExpertiseRating, 50.0),
                    (HitRating, 50.0),
                    (AttackPower, 40.0),
                    (HasteRating, 35.0),
                    (Stamina, 0.1),
                    (MeleeDps, 0.01),
                    (Armor, 0.0001),
                    (RangedDps, 0.0001),
                ],
            ),
            WeightProfile::new(
                Archetype::Enhancement,
                [
                    (MeleeDps, 135.0),
                    (HitRating, 80.0),
                    (ExpertiseRating, 84.0),
                    (Agility, 55.0),
                    (Intellect, 55.0),
                    (CritRating, 55.0),
                    (HasteRating, 42.0),
                    (Strength, 35.0),
                    (AttackPower, 32.0),
                    (SpellPower, 29.0),
                    (ArmorPenetrationRating, 26.0),
                    (Stamina, 0.1),
                    (Armor, 0.01),
                    (RangedDps, 0.0001),
                ],
            ),
            WeightProfile::new(
                Archetype::Shadow,
                [
                    (SpellPower, 100.0),
                    (HitRating, 85.0),
                    (HasteRating, 55.0),
                    (CritRating, 45.0),
                    (Spirit, 25.0),
                    (Intellect, 15.0),
                    (Stamina, 0.1),
                    (MeleeDps, 0.0001),
                    (Armor, 0.0001),
                    (RangedDps, 0.0001),
                ],
            ),
        ],
    }
}
