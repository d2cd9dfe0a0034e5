//! Human-readable phrasing for time spans ("1 minute", "2 hours", "3 days").
//!
//! Values are floored to the coarsest unit that applies; sub-unit remainders
//! are dropped.

use std::time::{Duration, SystemTime};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Render `d` as a floored count of minutes, hours, or days.
pub fn format_duration_words(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < SECS_PER_HOUR {
        pluralize(secs / SECS_PER_MINUTE, "minute")
    } else if secs < SECS_PER_DAY {
        pluralize(secs / SECS_PER_HOUR, "hour")
    } else {
        pluralize(secs / SECS_PER_DAY, "day")
    }
}

/// Time from `now` until `at`, clamped to zero when `at` is already past.
pub fn time_until(at: SystemTime, now: SystemTime) -> Duration {
    at.duration_since(now).unwrap_or_default()
}

fn pluralize(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u64, m: u64, s: u64) -> Duration {
        Duration::from_secs(h * 3600 + m * 60 + s)
    }

    #[test]
    fn minutes_are_floored() {
        assert_eq!(format_duration_words(hms(0, 1, 0)), "1 minute");
        assert_eq!(format_duration_words(hms(0, 2, 0)), "2 minutes");
        assert_eq!(format_duration_words(hms(0, 59, 59)), "59 minutes");
    }

    #[test]
    fn under_a_minute_is_zero_minutes() {
        assert_eq!(format_duration_words(Duration::ZERO), "0 minutes");
        assert_eq!(format_duration_words(Duration::from_secs(59)), "0 minutes");
    }

    #[test]
    fn hours_are_floored() {
        assert_eq!(format_duration_words(hms(0, 60, 0)), "1 hour");
        assert_eq!(format_duration_words(hms(1, 0, 1)), "1 hour");
        assert_eq!(format_duration_words(hms(2, 0, 0)), "2 hours");
        assert_eq!(format_duration_words(hms(23, 59, 59)), "23 hours");
    }

    #[test]
    fn days_are_floored() {
        assert_eq!(format_duration_words(hms(24, 0, 0)), "1 day");
        assert_eq!(format_duration_words(hms(47, 59, 59)), "1 day");
        assert_eq!(format_duration_words(hms(48, 0, 0)), "2 days");
        assert_eq!(format_duration_words(hms(72, 0, 0)), "3 days");
    }

    #[test]
    fn sub_second_precision_does_not_round_up() {
        let almost_hour = Duration::from_millis(3_599_999);
        assert_eq!(format_duration_words(almost_hour), "59 minutes");
    }

    #[test]
    fn time_until_clamps_past_instants() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        let past = now - Duration::from_secs(30);
        let future = now + Duration::from_secs(90);
        assert_eq!(time_until(past, now), Duration::ZERO);
        assert_eq!(time_until(future, now), Duration::from_secs(90));
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn unit_matches_magnitude(secs in 0u64..(400 * 86_400)) {
                let text = format_duration_words(Duration::from_secs(secs));
                let expected_unit = if secs < 3600 {
                    "minute"
                } else if secs < 86_400 {
                    "hour"
                } else {
                    "day"
                };
                prop_assert!(text.contains(expected_unit), "{secs}s -> {text}");
            }

            #[test]
            fn singular_only_for_exactly_one(secs in 0u64..(400 * 86_400)) {
                let text = format_duration_words(Duration::from_secs(secs));
                let count: u64 = text
                    .split_whitespace()
                    .next()
                    .and_then(|n| n.parse().ok())
                    .expect("leading count");
                prop_assert_eq!(text.ends_with('s'), count != 1);
            }
        }
    }
}
