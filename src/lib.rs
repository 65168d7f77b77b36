//! rdutyroster library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
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
        Commands::Duty { .. } => cli::commands::duty::handle(cli, &cli.command, cfg),
        Commands::Reassign { .. } => cli::commands::reassign::handle(cli, &cli.command, cfg),
        Commands::Swap { .. } => cli::commands::swap::handle(cli, &cli.command, cfg),
        Commands::Schedule { .. } => cli::commands::schedule::handle(cli, &cli.command, cfg),
        Commands::Search { .. } => cli::commands::search::handle(cli, &cli.command, cfg),
        Commands::Report => cli::commands::report::handle(cli, cfg),
        Commands::Stats { .. } => cli::commands::stats::handle(cli, &cli.command, cfg),
        Commands::Roster => cli::commands::roster::handle(cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(cli, &cli.command, cfg),
        Commands::Contact { .. } => cli::commands::contact::handle(cli, &cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, &cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(cli, &cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config once
    let mut cfg = Config::load();

    // 3. apply the database override from the command line, if any
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4. hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
