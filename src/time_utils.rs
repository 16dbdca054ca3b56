// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Format the month name and day of month, e.g. "April 14".
pub fn format_month_day(date: DateTime<Utc>) -> String {
    date.format("%B %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_month_day_has_no_padding() {
        let date = Utc.with_ymd_and_hms(2024, 4, 3, 23, 59, 0).unwrap();
        assert_eq!(format_month_day(date), "April 3");
    }

    #[test]
    fn test_format_rfc3339_matches_browser_iso_strings() {
        let date = Utc.with_ymd_and_hms(2024, 12, 25, 8, 30, 0).unwrap();
        assert_eq!(format_utc_rfc3339(date), "2024-12-25T08:30:00.000Z");
    }
}
