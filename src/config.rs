//! Engine configuration
//!
//! Run limits and the candidate catalog query, stored as RON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::items::CatalogQuery;

/// Settings for an upgrade run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Characters below this level are left alone
    pub min_character_level: u8,
    /// Constraints on catalog candidates
    pub catalog: CatalogQuery,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_character_level: 2,
            catalog: CatalogQuery::default(),
        }
    }
}

impl EngineConfig {
    /// Load from `path` if given, else the user config file, else defaults
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => config_path(),
        };

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match ron::from_str(&content) {
                    Ok(config) => {
                        log::info!("Config loaded from {:?}", path);
                        return config;
                    }
                    Err(e) => log::warn!("Failed to parse config: {}, using defaults", e),
                },
                Err(e) => log::warn!("Failed to read config: {}, using defaults", e),
            }
        }

        Self::default()
    }

    /// Write the config as RON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let ron = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        fs::write(path, ron)?;
        log::info!("Config saved to {:?}", path);
        Ok(())
    }
}

/// Get the user config file path
pub fn config_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "gearwise", "Gearwise") {
        let mut path = proj_dirs.config_dir().to_path_buf();
        path.push("config.ron");
        path
    } else {
        PathBuf::from("./config.ron")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.min_character_level, 2);
        assert_eq!(config.catalog.item_level_below, 200);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: EngineConfig = ron::from_str("(min_character_level: 10)").expect("parse config");
        assert_eq!(config.min_character_level, 10);
        assert_eq!(config.catalog, CatalogQuery::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("gearwise-config-{}", std::process::id()))
            .join("config.ron");
        let mut config = EngineConfig::default();
        config.min_character_level = 5;
        config.save(&path).expect("save config");

        assert_eq!(EngineConfig::load(Some(&path)), config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_bad_file_falls_back() {
        let path = std::env::temp_dir().join(format!("gearwise-bad-config-{}.ron", std::process::id()));
        fs::write(&path, "not ron at all (").expect("write file");
        assert_eq!(EngineConfig::load(Some(&path)), EngineConfig::default());
        let _ = fs::remove_file(&path);
    }
}
