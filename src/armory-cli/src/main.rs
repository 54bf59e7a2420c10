mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Configure {
            checklist,
            csv,
            json,
            show,
        } => {
            let defaults = commands::configure::Defaults {
                checklist,
                csv,
                json,
            };
            commands::configure::handle(defaults, show)?;
        }

        Commands::Recalc { path, dry_run } => {
            let path = load_config().checklist_path(path);
            commands::checklist::recalc(&path, dry_run)?;
        }

        Commands::Sort { path, dry_run } => {
            let path = load_config().checklist_path(path);
            commands::checklist::sort(&path, dry_run)?;
        }

        Commands::Convert { input, output } => {
            let config = load_config();
            let input = config.weapons_csv_path(input);
            let output = config.weapons_json_path(output);
            commands::convert::handle(&input, &output)?;
        }
    }

    Ok(())
}

/// Log to stderr so dry-run output on stdout stays clean
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "warn,armory=debug"
    } else {
        "warn,armory=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

/// Saved defaults; an unreadable config falls back to the built-in names
fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring configuration: {:#}", e);
        Config::default()
    })
}
