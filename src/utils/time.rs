//! Time and date utilities

use chrono::{Local, NaiveDate, Utc};

use crate::error::{HerbError, HerbResult};

/// Get current Unix timestamp in milliseconds
pub fn current_timestamp_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Today's date in the local timezone
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_iso_date(text: &str) -> HerbResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| HerbError::InvalidDate(text.to_string()))
}

/// Parse an optional date, falling back to today
pub fn date_or_today(text: Option<&str>) -> HerbResult<NaiveDate> {
    match text.map(str::trim).filter(|t| !t.is_empty()) {
        Some(t) => parse_iso_date(t),
        None => Ok(today_local()),
    }
}
