//! rreading library root.
//! Exposes the CLI parser, the high-level run() function and the record
//! store, log lifecycle and synchronizer used by the commands.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, base_dir: &Path) -> AppResult<()> {
    if let Commands::Init { .. } = &cli.command {
        return commands::init::handle(&cli.command, base_dir);
    }

    let cfg = Config::load(base_dir)?;
    let yes = cli.yes;

    match &cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Config { .. } => commands::config::handle(&cli.command, &cfg),
        Commands::Read { .. } => commands::read::handle(&cli.command, &cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, &cfg),
        Commands::Ll => commands::list::list_sessions(&cfg),
        Commands::Days => commands::list::list_days(&cfg),
        Commands::Dellast => commands::del::delete_last(&cfg, yes),
        Commands::Cl => commands::del::clear_temporary(&cfg),
        Commands::Note { .. } | Commands::Errata { .. } => {
            commands::note::handle(&cli.command, &cfg, yes)
        }
        Commands::Today => commands::today::handle(&cfg),
        Commands::Sync { .. } => commands::sync::handle(&cli.command, &cfg, yes),
        Commands::Plan { .. } => commands::plan::handle(&cli.command, &cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, &cfg, yes),
        Commands::Audit => commands::audit::handle(&cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let base_dir = Config::resolve_base_dir(cli.dir.as_deref());
    dispatch(&cli, &base_dir)
}
