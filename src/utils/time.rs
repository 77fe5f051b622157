//! Time utilities: the display timestamp stamped on records.

use chrono::{Local, NaiveDateTime};

/// Format of `lastUpdated`, e.g. "Jan 5, 2024, 3:45 PM".
pub const TIMESTAMP_FORMAT: &str = "%b %-d, %Y, %-I:%M %p";

/// Source of "now" for stamping records; swapped in tests.
pub type Clock = fn() -> NaiveDateTime;

pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
