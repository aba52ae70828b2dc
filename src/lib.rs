//! rShiftgap library root.
//! Exposes the coverage engine, the snapshot loader, the CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Gaps { .. } => cli::commands::gaps::handle(&cli.command, cfg),
        Commands::Services => cli::commands::services::handle(cfg),
        Commands::Day { .. } => cli::commands::day::handle(&cli.command, cfg),
        Commands::Footer { .. } => cli::commands::footer::handle(&cli.command, cfg),
        Commands::Calendar { .. } => cli::commands::calendar::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Apply the global command-line overrides on top of the loaded config.
pub fn effective_config(cli: &Cli) -> AppResult<Config> {
    // test mode never touches the user's config file
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(snapshot) = &cli.snapshot {
        cfg.snapshot = snapshot.clone();
    }
    if let Some(lang) = cli.lang {
        cfg.language = lang.code().to_string();
    }
    if cli.no_color {
        cfg.color = false;
    }

    Ok(cfg)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = effective_config(&cli)?;
    dispatch(&cli, &cfg)
}
