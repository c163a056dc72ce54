//! Calendar date helpers
//!
//! Log dates are plain calendar dates with no time-of-day or timezone. They are
//! stored as `YYYY-MM-DD` text, so lexical order in SQL matches calendar order.

use chrono::{Datelike, Duration, NaiveDate};

use crate::constants::{ERR_INVALID_DATE, LOG_DATE_FORMAT};
use crate::error::{AppError, Result};

/// Parse a caller-supplied log date
///
/// Only the canonical `YYYY-MM-DD` form with a four-digit year is accepted;
/// signed or five-digit years and anything that is not a real calendar date
/// (e.g. `2024-02-30`) are validation failures.
pub fn parse_log_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    let reject = || {
        tracing::warn!("Rejected malformed log date: {:?}", raw);
        AppError::validation(ERR_INVALID_DATE)
    };

    if !is_canonical_shape(raw) {
        return Err(reject());
    }
    NaiveDate::parse_from_str(raw, LOG_DATE_FORMAT).map_err(|_| reject())
}

/// `\d{4}-\d{2}-\d{2}`, the only form whose text order is calendar order
fn is_canonical_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse an optional date, falling back to the given default when absent or blank
pub fn parse_optional_date(raw: Option<&str>, default: NaiveDate) -> Result<NaiveDate> {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => parse_log_date(s),
        _ => Ok(default),
    }
}

/// Monday-to-Sunday calendar week containing `day`
///
/// Fails only when the week runs past the representable date range.
pub fn week_bounds(day: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
    let offset = Duration::days(i64::from(day.weekday().num_days_from_monday()));
    let start = day.checked_sub_signed(offset);
    let end = start.and_then(|s| s.checked_add_signed(Duration::days(6)));

    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => {
            tracing::warn!("Week of {} is out of range", day);
            Err(AppError::validation(ERR_INVALID_DATE))
        }
    }
}

/// The caller's "today" when none is supplied
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
