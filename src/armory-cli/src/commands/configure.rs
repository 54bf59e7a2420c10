//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up armory CLI defaults.

use crate::config::{Config, DEFAULT_CHECKLIST, DEFAULT_WEAPONS_CSV, DEFAULT_WEAPONS_JSON};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Default paths requested on the command line
pub struct Defaults {
    pub checklist: Option<PathBuf>,
    pub csv: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

impl Defaults {
    fn is_empty(&self) -> bool {
        self.checklist.is_none() && self.csv.is_none() && self.json.is_none()
    }
}

/// Handle the configure command
///
/// # Arguments
/// * `defaults` - Paths to store as new defaults
/// * `show` - If true, show current configuration
pub fn handle(defaults: Defaults, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if defaults.is_empty() {
        show_usage();
        return Ok(());
    }

    apply(&mut config, defaults);
    config.save()?;

    println!("Configuration updated");
    show_config(&config);

    Ok(())
}

/// Merge requested defaults into the configuration
fn apply(config: &mut Config, defaults: Defaults) {
    if let Some(path) = defaults.checklist {
        config.checklist = Some(path);
    }
    if let Some(path) = defaults.csv {
        config.weapons_csv = Some(path);
    }
    if let Some(path) = defaults.json {
        config.weapons_json = Some(path);
    }
}

/// Display current configuration
fn show_config(config: &Config) {
    show_path("Checklist", config.checklist.as_deref(), DEFAULT_CHECKLIST);
    show_path("Weapon CSV", config.weapons_csv.as_deref(), DEFAULT_WEAPONS_CSV);
    show_path("JSON catalog", config.weapons_json.as_deref(), DEFAULT_WEAPONS_JSON);

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

fn show_path(label: &str, configured: Option<&Path>, default: &str) {
    match configured {
        Some(path) => println!("{}: {}", label, path.display()),
        None => println!("{}: {} (default)", label, default),
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: armory configure --checklist PATH --csv PATH --json PATH");
    println!("   or: armory configure --show");
    println!();
    println!("Relative defaults are resolved against the directory armory is run from.");
}
