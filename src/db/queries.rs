use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use crate::utils::date::parse_date;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Record> {
    let date_str: String = row.get("Data")?;

    let date = parse_date(&date_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(Record {
        id: row.get("id")?,
        date,
        hours: row.get("Horas")?,
    })
}

/// True if any row carries exactly this DD/MM/YYYY date string.
pub fn exists_for_date(conn: &Connection, date_str: &str) -> AppResult<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT id FROM registros WHERE Data = ?1 LIMIT 1",
            [date_str],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Append a row and return its new id.
pub fn insert_record(conn: &Connection, date_str: &str, hours: f64) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO registros (Data, Horas) VALUES (?1, ?2)",
        params![date_str, hours],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite date and hours of a row. Returns the number of rows touched
/// (0 when the id does not exist).
pub fn update_record(conn: &Connection, id: i64, date_str: &str, hours: f64) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE registros SET Data = ?1, Horas = ?2 WHERE id = ?3",
        params![date_str, hours, id],
    )?;
    Ok(n)
}

pub fn load_all(conn: &Connection) -> AppResult<Vec<Record>> {
    let mut stmt = conn.prepare("SELECT id, Data, Horas FROM registros ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_records(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM registros", [], |row| row.get(0))?;
    Ok(n)
}

pub fn sum_hours(conn: &Connection) -> AppResult<f64> {
    let total: Option<f64> =
        conn.query_row("SELECT SUM(Horas) FROM registros", [], |row| row.get(0))?;
    Ok(total.unwrap_or(0.0))
}

/// Every `(id, Data)` pair as stored, without parsing the date.
pub fn load_raw_dates(conn: &Connection) -> AppResult<Vec<(i64, String)>> {
    let mut stmt = conn.prepare("SELECT id, Data FROM registros ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    Ok(rows.collect::<Result<Vec<_>>>()?)
}

/// Dates carried by more than one row, with their row count.
pub fn duplicate_dates(conn: &Connection) -> AppResult<Vec<(String, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT Data, COUNT(*) FROM registros
         GROUP BY Data HAVING COUNT(*) > 1
         ORDER BY MIN(id) ASC",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    Ok(rows.collect::<Result<Vec<_>>>()?)
}

pub fn count_negative(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM registros WHERE Horas < 0",
        [],
        |row| row.get(0),
    )?;
    Ok(n)
}
