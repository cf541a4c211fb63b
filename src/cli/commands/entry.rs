use crate::cli::commands::open_controller;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle `manual` and `negative`: one record for today.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut controller = open_controller(cfg)?;

    let saved = match cmd {
        Commands::Manual { hours } => controller.manual_entry(hours)?,
        Commands::Negative { hours } => controller.negative_entry(hours)?,
        _ => return Ok(()),
    };

    success(saved);
    Ok(())
}
