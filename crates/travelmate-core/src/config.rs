// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::recommender::RecommenderConfig;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_CATALOG_FILE: &str = "travel_data.csv";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog CSV to load when none is given on the command line.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default)]
    pub recommender: RecommenderConfig,
}

/// Directory holding `config.json`. Falls back to the working directory when
/// the platform has no config location.
pub fn get_config_root() -> PathBuf {
    ProjectDirs::from("org", "travelmate", "travelmate")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn default_config_path() -> PathBuf {
    get_config_root().join(CONFIG_FILE_NAME)
}

impl AppConfig {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config
            .recommender
            .validate()
            .with_context(|| format!("Invalid recommender settings in {}", path.display()))?;

        log::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// The catalog to load: the configured path, or `travel_data.csv` in the
    /// working directory.
    pub fn catalog_path_or_default(&self) -> PathBuf {
        self.catalog_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(
            config.catalog_path_or_default(),
            PathBuf::from(DEFAULT_CATALOG_FILE)
        );
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let config = AppConfig {
            catalog_path: Some(PathBuf::from("/data/india.csv")),
            recommender: RecommenderConfig {
                stretch: 750.0,
                max_fallback: 2,
            },
        };
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "recommender": { "stretch": 1000 } }"#).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.catalog_path, None);
        assert_eq!(loaded.recommender.stretch, 1000.0);
        assert_eq!(
            loaded.recommender.max_fallback,
            crate::recommender::DEFAULT_MAX_FALLBACK
        );
    }

    #[test]
    fn test_malformed_or_invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&path, "{ not json").unwrap();
        assert!(AppConfig::load_from(&path).is_err());

        fs::write(&path, r#"{ "recommender": { "stretch": -5 } }"#).unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }
}
