//! Time utilities: parsing stored timestamps, rounding elapsed durations.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, Utc};

/// Layout produced by SQLite `datetime('now')`.
pub const STORE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn parse_store_time(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, STORE_TIME_FORMAT)
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Current wall-clock time on the same (UTC) scale as `datetime('now')`.
pub fn store_now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Whole seconds between `start` and `end`, rounded to the nearest second.
pub fn rounded_secs_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let millis = (end - start).num_milliseconds();
    (millis as f64 / 1000.0).round() as i64
}
