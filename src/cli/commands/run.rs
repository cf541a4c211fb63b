use crate::cli::commands::open_controller;
use crate::cli::repl::HELP;
use crate::cli::session::run_session;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;

/// Handle the interactive session: the stopwatch starts right away.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut controller = open_controller(cfg)?;

    header("rHourLog");
    println!("{HELP}\n");

    run_session(&mut controller)
}
