use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `registros` table exists.
fn ensure_records_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS registros (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            Data  TEXT NOT NULL,
            Horas FLOAT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check whether a table exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let exists: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(exists.is_some())
}

/// Initialize the database. Idempotent: safe to call on every start.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    ensure_records_table(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}
