//! Date helpers for the fixed DD/MM/YYYY record format.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Storage and display format of a record date.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a DD/MM/YYYY string, rejecting impossible calendar dates.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

pub fn parse_date_strict(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// The given date at 00:00:00, used when a record is edited by date only.
pub fn at_midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
