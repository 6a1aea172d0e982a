//! Shared formatting utilities for the UI layer.
//!
//! Timestamps from the backend are RFC 3339 and decode into
//! `DateTime<Utc>`; hearing dates are plain `YYYY-MM-DD` strings.

use chrono::{DateTime, Local, Utc};
use shared_types::parse_day;

/// Shown wherever a value is missing.
pub const MISSING: &str = "N/A";

/// "Jan 20, 2026", or `N/A` when absent.
pub fn format_date(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// "Jan 20, 2026 9:35 PM" in UTC, or `N/A` when absent.
pub fn format_datetime(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|d| d.format("%b %-d, %Y %-I:%M %p").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// Hearing day as "Jul 1, 2024". Unparseable input is shown as-is.
pub fn format_day(value: &str) -> String {
    match parse_day(value) {
        Some(day) => day.format("%b %-d, %Y").to_string(),
        None if value.trim().is_empty() => MISSING.to_string(),
        None => value.to_string(),
    }
}

/// "Jul 1, 2024 09:00 to 11:30" for a hearing slot. The end day is only
/// repeated when it differs from the start day.
pub fn format_slot(start_date: &str, start_time: &str, end_date: &str, end_time: &str) -> String {
    let start = format!("{} {}", format_day(start_date), start_time.trim());
    if parse_day(start_date) == parse_day(end_date) {
        format!("{} to {}", start.trim_end(), end_time.trim())
    } else {
        format!("{} to {} {}", start.trim_end(), format_day(end_date), end_time.trim())
    }
}

/// Dashboard clock line, e.g. "Monday, January 19, 2026 09:35:12 PM".
pub fn format_clock(now: &DateTime<Local>) -> String {
    now.format("%A, %B %-d, %Y %I:%M:%S %p").to_string()
}

/// Today's date as `YYYY-MM-DD`, the value a date input expects.
pub fn today_input_value() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
