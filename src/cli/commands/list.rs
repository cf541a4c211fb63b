use crate::cli::commands::open_controller;
use crate::config::Config;
use crate::errors::AppResult;

/// Open the record browser once and print it.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut controller = open_controller(cfg)?;
    controller.visualize_data()
}
