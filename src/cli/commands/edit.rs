use crate::cli::commands::open_controller;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, date, hours } = cmd {
        let mut controller = open_controller(cfg)?;
        controller.edit_record(Some(*id), date, hours)?;
        success("Record updated successfully!");
    }

    Ok(())
}
