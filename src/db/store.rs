//! Record Store: persistence for the `registros` table.
//!
//! Every operation opens its own connection and drops it on return; there is
//! never a long-lived handle or a transaction spanning several statements.
//! The audit line that follows a write never turns a committed write into
//! an error.

use crate::db::initialize::init_db;
use crate::db::log::ttlog_best_effort;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::record::Record;
use crate::utils::date::format_date;
use crate::utils::path::ensure_parent_dir;
use crate::utils::time::decimal_to_clock;
use chrono::NaiveDateTime;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> AppResult<DbPool> {
        ensure_parent_dir(&self.path)?;
        Ok(DbPool::new(&self.path)?)
    }

    /// Create the tables if absent. Idempotent.
    pub fn ensure_schema(&self) -> AppResult<()> {
        let pool = self.open()?;
        init_db(&pool.conn)
    }

    pub fn exists_for_date(&self, date: &chrono::NaiveDate) -> AppResult<bool> {
        let pool = self.open()?;
        queries::exists_for_date(&pool.conn, &format_date(date))
    }

    /// Append a record for the date part of `timestamp`.
    pub fn insert(&self, timestamp: &NaiveDateTime, hours: f64) -> AppResult<Record> {
        let pool = self.open()?;
        let date = timestamp.date();
        let date_str = format_date(&date);

        let id = queries::insert_record(&pool.conn, &date_str, hours)?;
        ttlog_best_effort(
            &pool.conn,
            "add",
            &date_str,
            &format!("Record {} added: {}", id, decimal_to_clock(hours)),
        );

        Ok(Record { id, date, hours })
    }

    /// Overwrite date and hours of `id`. A missing id is silently ignored.
    pub fn update(&self, id: i64, timestamp: &NaiveDateTime, hours: f64) -> AppResult<()> {
        let pool = self.open()?;
        let date_str = format_date(&timestamp.date());

        let touched = queries::update_record(&pool.conn, id, &date_str, hours)?;
        if touched > 0 {
            ttlog_best_effort(
                &pool.conn,
                "edit",
                &date_str,
                &format!("Record {} updated: {}", id, decimal_to_clock(hours)),
            );
        }
        Ok(())
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> AppResult<Vec<Record>> {
        let pool = self.open()?;
        queries::load_all(&pool.conn)
    }
}
