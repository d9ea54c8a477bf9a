//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::{DateTime, Utc};

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(Utc::now().year())
}

/// Format a timestamp as a short human-readable date.
///
/// Usage in templates: `{{ order.date|short_date }}`
#[askama::filter_fn]
pub fn short_date(value: &DateTime<Utc>, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_short_date(value))
}

/// Format a timestamp as a time of day, for "last updated" lines.
///
/// Usage in templates: `{{ refreshed_at|clock_time }}`
#[askama::filter_fn]
pub fn clock_time(value: &DateTime<Utc>, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_clock_time(value))
}

fn format_short_date(value: &DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}

fn format_clock_time(value: &DateTime<Utc>) -> String {
    value.format("%H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_short_date_format() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 2, 10, 0, 0).single().expect("valid date");
        assert_eq!(format_short_date(&ts), "Jun 2, 2024");
    }

    #[test]
    fn test_clock_time_format() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 2, 9, 5, 7).single().expect("valid date");
        assert_eq!(format_clock_time(&ts), "09:05:07 UTC");
    }
}
