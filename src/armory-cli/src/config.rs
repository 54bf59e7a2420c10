//! Configuration management for armory CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Checklist used when neither an argument nor the config names one
pub const DEFAULT_CHECKLIST: &str = "weapon_requirements.md";
/// Weapon CSV used when neither an argument nor the config names one
pub const DEFAULT_WEAPONS_CSV: &str = "weapons.csv";
/// Catalog output used when neither an argument nor the config names one
pub const DEFAULT_WEAPONS_JSON: &str = "weapons.json";

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub checklist: Option<PathBuf>,
    pub weapons_csv: Option<PathBuf>,
    pub weapons_json: Option<PathBuf>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("armory");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Checklist path: argument, then config, then the default name
    pub fn checklist_path(&self, provided: Option<PathBuf>) -> PathBuf {
        resolve(provided, &self.checklist, DEFAULT_CHECKLIST)
    }

    /// Weapon CSV path: argument, then config, then the default name
    pub fn weapons_csv_path(&self, provided: Option<PathBuf>) -> PathBuf {
        resolve(provided, &self.weapons_csv, DEFAULT_WEAPONS_CSV)
    }

    /// Catalog output path: argument, then config, then the default name
    pub fn weapons_json_path(&self, provided: Option<PathBuf>) -> PathBuf {
        resolve(provided, &self.weapons_json, DEFAULT_WEAPONS_JSON)
    }
}

fn resolve(provided: Option<PathBuf>, configured: &Option<PathBuf>, default: &str) -> PathBuf {
    provided
        .or_else(|| configured.clone())
        .unwrap_or_else(|| PathBuf::from(default))
}
