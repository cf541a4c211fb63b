//! Time utilities: conversions between decimal hours and HH:MM clock strings.

use crate::errors::{AppError, AppResult};

/// Float noise tolerated before truncating minutes, in units of
/// `f64::EPSILON` relative to the value. Covers the error of values produced
/// by `clock_to_decimal` (e.g. 7 + 7/60) and nothing coarser.
const MINUTE_NOISE_ULPS: f64 = 64.0;

/// Render decimal hours as `HH:MM`.
///
/// The hour part is the integer part of the value and the minute part is the
/// fractional part times 60, truncated. Negative values keep their sign in
/// front of the whole clock string (`-0.5` → `-00:30`).
pub fn decimal_to_clock(hours_decimal: f64) -> String {
    let sign = if hours_decimal < 0.0 { "-" } else { "" };
    let abs = hours_decimal.abs();

    let mut hours = abs.trunc() as i64;
    let noise = MINUTE_NOISE_ULPS * f64::EPSILON * abs.max(1.0) * 60.0;
    let mut minutes = ((abs - abs.trunc()) * 60.0 + noise).floor() as i64;
    if minutes >= 60 {
        hours += 1;
        minutes -= 60;
    }

    if hours == 0 && minutes == 0 {
        return "00:00".to_string();
    }

    format!("{}{:02}:{:02}", sign, hours, minutes)
}

/// Parse an `HH:MM` string into decimal hours (`hours + minutes / 60`).
///
/// The input must split into exactly two integer components around a single
/// `:`; anything else is an `InvalidTime` error.
pub fn clock_to_decimal(hhmm: &str) -> AppResult<f64> {
    let invalid = || AppError::InvalidTime(hhmm.to_string());

    let mut parts = hhmm.trim().split(':');
    let (Some(h), Some(m), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    let hours: i64 = h.trim().parse().map_err(|_| invalid())?;
    let minutes: i64 = m.trim().parse().map_err(|_| invalid())?;

    Ok(hours as f64 + minutes as f64 / 60.0)
}

/// Convert an H:M:S triple into decimal hours.
pub fn hms_to_decimal(hours: u64, minutes: u64, seconds: u64) -> f64 {
    hours as f64 + minutes as f64 / 60.0 + seconds as f64 / 3600.0
}

/// Total of a set of decimal-hour values, rendered as `HH:MM`.
pub fn sum_as_clock<I>(values: I) -> String
where
    I: IntoIterator<Item = f64>,
{
    decimal_to_clock(values.into_iter().sum())
}
