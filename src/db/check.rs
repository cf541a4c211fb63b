//! Consistency check of the `registros` table, for `db --check`.

use crate::db::queries::{duplicate_dates, load_raw_dates};
use crate::errors::AppResult;
use crate::utils::date::parse_date;
use rusqlite::Connection;

#[derive(Debug, Default, PartialEq)]
pub struct CheckReport {
    /// Result of `PRAGMA integrity_check`, `"ok"` when clean.
    pub integrity: String,
    /// Rows whose `Data` is not a DD/MM/YYYY date.
    pub bad_dates: Vec<(i64, String)>,
    /// Dates recorded more than once, with their row count.
    pub duplicate_dates: Vec<(String, i64)>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.integrity == "ok" && self.bad_dates.is_empty() && self.duplicate_dates.is_empty()
    }
}

pub fn check_records(conn: &Connection) -> AppResult<CheckReport> {
    let integrity: String = conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    let bad_dates = load_raw_dates(conn)?
        .into_iter()
        .filter(|(_, raw)| parse_date(raw).is_none())
        .collect();

    Ok(CheckReport {
        integrity,
        bad_dates,
        duplicate_dates: duplicate_dates(conn)?,
    })
}
