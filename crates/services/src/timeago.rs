//! Coarse relative-age formatting for post timestamps.
//!
//! Picks the largest unit whose floored value is non-zero, using the fixed
//! thresholds the board has always displayed. The unit is always plural,
//! "1 hours ago" included.

use chrono::{DateTime, Utc};

/// Formats the age of `then` relative to `now`.
///
/// Timestamps in the future of `now` fall through the seconds branch with a
/// negative count; nothing is clamped.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    if seconds < 60 {
        return format!("{seconds} seconds ago");
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{minutes} minutes ago");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours} hours ago");
    }

    let days = hours / 24;
    if days < 7 {
        return format!("{days} days ago");
    }

    let weeks = days / 7;
    if weeks < 4 {
        return format!("{weeks} weeks ago");
    }

    let months = days / 30;
    if months < 12 {
        return format!("{months} months ago");
    }

    let years = days / 365;
    format!("{years} years ago")
}

/// Convenience wrapper over the wall clock.
pub fn time_ago_from_now(then: DateTime<Utc>) -> String {
    time_ago(then, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn ago(d: Duration) -> String {
        time_ago(now() - d, now())
    }

    #[test]
    fn seconds_band() {
        assert_eq!(ago(Duration::seconds(0)), "0 seconds ago");
        assert_eq!(ago(Duration::seconds(45)), "45 seconds ago");
        assert_eq!(ago(Duration::seconds(59)), "59 seconds ago");
    }

    #[test]
    fn minutes_band() {
        assert_eq!(ago(Duration::seconds(60)), "1 minutes ago");
        assert_eq!(ago(Duration::minutes(59)), "59 minutes ago");
    }

    #[test]
    fn exactly_one_hour_is_hours() {
        // 3600 s is minutes == 60, which already overflows the minute band.
        assert_eq!(ago(Duration::seconds(3600)), "1 hours ago");
        assert_eq!(ago(Duration::hours(23)), "23 hours ago");
    }

    #[test]
    fn days_weeks_months_years() {
        assert_eq!(ago(Duration::days(1)), "1 days ago");
        assert_eq!(ago(Duration::days(6)), "6 days ago");
        assert_eq!(ago(Duration::days(7)), "1 weeks ago");
        assert_eq!(ago(Duration::days(27)), "3 weeks ago");
        assert_eq!(ago(Duration::days(28)), "0 months ago");
        assert_eq!(ago(Duration::days(45)), "1 months ago");
        assert_eq!(ago(Duration::days(359)), "11 months ago");
        // 360..=364 days: months hits 12, years still floors to 0.
        assert_eq!(ago(Duration::days(364)), "0 years ago");
        assert_eq!(ago(Duration::days(365)), "1 years ago");
        assert_eq!(ago(Duration::days(800)), "2 years ago");
    }

    #[test]
    fn future_timestamps_go_negative() {
        assert_eq!(ago(Duration::seconds(-5)), "-5 seconds ago");
    }
}
