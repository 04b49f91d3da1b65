//! Local Dates
//!
//! The date input wants `YYYY-MM-DD` in the browser's local time.

use chrono::{DateTime, Utc};

/// Format `epoch_ms` shifted by a JS-style timezone offset (minutes behind UTC)
pub fn local_date(epoch_ms: f64, tz_offset_minutes: f64) -> String {
    let shifted = (epoch_ms - tz_offset_minutes * 60_000.0) as i64;
    DateTime::<Utc>::from_timestamp_millis(shifted)
        .map(|at| at.date_naive().format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn today_local() -> String {
    let now = js_sys::Date::new_0();
    local_date(now.get_time(), now.get_timezone_offset())
}
