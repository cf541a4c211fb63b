pub mod config;
pub mod db;
pub mod edit;
pub mod entry;
pub mod init;
pub mod list;
pub mod log;
pub mod run;

use crate::config::Config;
use crate::core::controller::Controller;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::ui::TerminalView;

/// Controller over the configured database, schema guaranteed.
pub(crate) fn open_controller(cfg: &Config) -> AppResult<Controller<TerminalView>> {
    let store = RecordStore::new(&cfg.database);
    store.ensure_schema()?;

    Ok(
        Controller::new(store, TerminalView::new(cfg.separator()))
            .with_baseline_hours(cfg.daily_baseline_hours),
    )
}
