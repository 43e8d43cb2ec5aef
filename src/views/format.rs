//! Display formatting shared by the resource views.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a server timestamp as a calendar date in the local time zone.
///
/// Timestamps with an offset are converted to local time. Naive timestamps
/// already are local time, so their own date is kept. Anything unparseable is
/// returned as is.
pub fn local_date(timestamp: &str) -> String {
    let trimmed = timestamp.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return datetime.with_timezone(&Local).format(DATE_FORMAT).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return naive.format(DATE_FORMAT).to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return date.format(DATE_FORMAT).to_string();
    }
    timestamp.to_string()
}

/// Formats a metric value with two decimals.
pub fn two_decimals(value: f64) -> String {
    format!("{:.2}", value)
}
