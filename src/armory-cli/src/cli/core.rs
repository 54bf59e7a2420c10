//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "armory")]
#[command(about = "Weapon requirement checklist and weapon catalog tools", long_about = None)]
pub struct Cli {
    /// Show debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recompute the requirement total on every checklist line
    #[command(visible_alias = "r")]
    Recalc {
        /// Path to the checklist (defaults to configured path or weapon_requirements.md)
        path: Option<PathBuf>,

        /// Print the result instead of rewriting the file
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Sort checklist lines by their total (blank lines are removed)
    #[command(visible_alias = "s")]
    Sort {
        /// Path to the checklist (defaults to configured path or weapon_requirements.md)
        path: Option<PathBuf>,

        /// Print the result instead of rewriting the file
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Convert the weapon spreadsheet export to the JSON catalog
    #[command(visible_alias = "c")]
    Convert {
        /// Path to the weapon CSV (defaults to configured path or weapons.csv)
        input: Option<PathBuf>,

        /// Path to write the JSON catalog (defaults to configured path or weapons.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Configure default file locations
    Configure {
        /// Set default checklist path
        #[arg(long)]
        checklist: Option<PathBuf>,

        /// Set default weapon CSV path
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Set default JSON catalog path
        #[arg(long)]
        json: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
