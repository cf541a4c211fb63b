//! rHourLog library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (record store, stopwatch, controller).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
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
        None | Some(Commands::Run) => cli::commands::run::handle(cfg),
        Some(Commands::Init) => cli::commands::init::handle(cli, cfg),
        Some(cmd @ (Commands::Manual { .. } | Commands::Negative { .. })) => {
            cli::commands::entry::handle(cmd, cfg)
        }
        Some(cmd @ Commands::Edit { .. }) => cli::commands::edit::handle(cmd, cfg),
        Some(Commands::List) => cli::commands::list::handle(cfg),
        Some(cmd @ Commands::Log { .. }) => cli::commands::log::handle(cmd, cfg),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
        Some(cmd @ Commands::Db { .. }) => cli::commands::db::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // --db overrides the configured database
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
