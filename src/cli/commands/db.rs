use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::check::{CheckReport, check_records};
use crate::db::log::ttlog_best_effort;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::ui::messages::{error, header, info, success, warning};

fn print_report(report: &CheckReport) {
    header("Database check");

    if report.integrity == "ok" {
        success("Integrity check passed.");
    } else {
        error(format!("Integrity check failed: {}", report.integrity));
    }

    for (id, raw) in &report.bad_dates {
        error(format!("Record {}: '{}' is not a DD/MM/YYYY date", id, raw));
    }
    for (date, count) in &report.duplicate_dates {
        warning(format!("{} has {} records", date, count));
    }

    if report.is_clean() {
        success("All records are consistent.");
    }
}

/// `db`: statistics, consistency check and VACUUM, in that order.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    if !(*check || *vacuum || *show_info) {
        info("Nothing to do: pass --info, --check or --vacuum.");
        return Ok(());
    }

    RecordStore::new(&cfg.database).ensure_schema()?;
    let pool = DbPool::new(&cfg.database)?;

    if *show_info {
        stats::print_db_info(&pool, &cfg.database)?;
    }

    if *check {
        print_report(&check_records(&pool.conn)?);
    }

    if *vacuum {
        pool.conn.execute_batch("VACUUM;")?;
        ttlog_best_effort(&pool.conn, "vacuum", "", "Database compacted");
        success("Vacuum completed.");
    }

    Ok(())
}
