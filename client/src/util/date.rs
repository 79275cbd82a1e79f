//! Timestamp formatting for card metadata.
//!
//! The API emits either RFC 3339 timestamps or naive ISO 8601 ones (no offset,
//! optional fractional seconds). Both render as a short calendar date;
//! anything else is shown as received rather than hidden.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Format a server timestamp as e.g. `Jan 5, 2024`.
pub fn format_created_at(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_owned()
}
