use chrono::NaiveDate;
use serde::Deserialize;

use crate::dates::{local_today, parse_log_date, parse_optional_date};
use crate::error::Result;

/// Query parameters shared by per-user, per-day reads
#[derive(Debug, Deserialize)]
pub struct UserDayParams {
    pub user: String,
    /// `YYYY-MM-DD`; today when omitted
    pub date: Option<String>,
}

impl UserDayParams {
    pub fn day(&self) -> Result<NaiveDate> {
        resolve_day(self.date.as_deref())
    }
}

/// Parse an optional date parameter, defaulting to today's local date
pub fn resolve_day(raw: Option<&str>) -> Result<NaiveDate> {
    parse_optional_date(raw, local_today())
}

/// Parse a required date field
pub fn required_day(raw: &str) -> Result<NaiveDate> {
    parse_log_date(raw)
}
