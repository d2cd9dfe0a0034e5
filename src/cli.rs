//! CLI argument parsing via clap.

use clap::Parser;
use std::time::{Duration, SystemTime};

/// Set a temporary Slack status, then put the old one back.
///
/// Press enter to restore your previous status early, or type `e` to keep the
/// new status and exit.
#[derive(Debug, Parser)]
#[command(name = "afk", disable_version_flag = true)]
pub struct Args {
    /// The message to display while away.
    #[arg(short = 'm', long = "message", default_value = "Away from keyboard")]
    pub message: String,

    /// Emoji to display while away.
    #[arg(short = 'e', long = "emoji", default_value = ":speech_balloon:")]
    pub emoji: String,

    /// How long the status should last (e.g. 30m, 1h30m, 2d).
    #[arg(
        short = 'd',
        long = "duration",
        default_value = "1h",
        value_parser = parse_duration_flag
    )]
    pub duration: Duration,

    /// Enable Do Not Disturb for the same duration.
    #[arg(long = "dnd")]
    pub dnd: bool,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Print version and build information, then exit.
    #[arg(short = 'V', long = "version")]
    pub version: bool,
}

fn parse_duration_flag(raw: &str) -> Result<Duration, String> {
    let duration = parse_duration_arg(raw)
        .ok_or_else(|| format!("invalid duration `{raw}`. Examples: 90s, 30m, 1h30m, 2d."))?;
    // The deadline is computed from the wall clock, so it must fit in `SystemTime`.
    if SystemTime::now().checked_add(duration).is_none() {
        return Err(format!("invalid duration `{raw}`: too far in the future."));
    }
    Ok(duration)
}

/// Parse durations such as `500ms`, `90s`, `1h30m`, or `2d`.
///
/// Bare digits are seconds. Segments may repeat units (`1m1m` is two minutes).
pub fn parse_duration_arg(input: &str) -> Option<Duration> {
    let s = input.trim().to_ascii_lowercase();
    if s.is_empty() {
        return None;
    }
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse::<u64>().ok().map(Duration::from_secs);
    }

    let mut total = Duration::ZERO;
    let mut rest = s.as_str();
    while !rest.is_empty() {
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return None;
        }
        let (digits, tail) = rest.split_at(digits_len);
        let unit_len = tail.bytes().take_while(u8::is_ascii_alphabetic).count();
        if unit_len == 0 {
            return None;
        }
        let (unit, tail) = tail.split_at(unit_len);
        // Parse into u64 so we can use checked arithmetic and avoid silent
        // overflow for large day/hour values.
        let value = digits.parse::<u64>().ok()?;
        total = total.checked_add(segment(value, unit)?)?;
        rest = tail;
    }
    Some(total)
}

fn segment(value: u64, unit: &str) -> Option<Duration> {
    let secs_per_unit = match unit {
        "ms" => return Some(Duration::from_millis(value)),
        "s" => 1,
        "m" => 60,
        "h" => 3_600,
        "d" => 86_400,
        _ => return None,
    };
    value.checked_mul(secs_per_unit).map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_afk_conventions() {
        let args = Args::parse_from(["afk"]);
        assert_eq!(args.message, "Away from keyboard");
        assert_eq!(args.emoji, ":speech_balloon:");
        assert_eq!(args.duration, Duration::from_secs(3600));
        assert!(!args.dnd);
        assert!(!args.version);
    }

    #[test]
    fn parses_lunch_invocation() {
        let args = Args::parse_from([
            "afk",
            "--message",
            "Lunch!",
            "--emoji",
            ":salad:",
            "--duration",
            "45m",
            "--dnd",
        ]);
        assert_eq!(args.message, "Lunch!");
        assert_eq!(args.emoji, ":salad:");
        assert_eq!(args.duration, Duration::from_secs(45 * 60));
        assert!(args.dnd);
    }

    #[test]
    fn version_flag_is_plain_bool() {
        assert!(Args::parse_from(["afk", "--version"]).version);
        assert!(Args::parse_from(["afk", "-V"]).version);
    }

    #[test]
    fn invalid_duration_is_rejected_by_clap() {
        let err = Args::try_parse_from(["afk", "--duration", "soon"]).unwrap_err();
        assert!(err.to_string().contains("invalid duration"), "got: {err}");
    }

    #[test]
    fn duration_past_clock_range_is_rejected_by_clap() {
        let err = Args::try_parse_from(["afk", "--duration", "18446744073709551615"]).unwrap_err();
        assert!(err.to_string().contains("too far in the future"), "got: {err}");

        let err = Args::try_parse_from(["afk", "--duration", "213503982334601d"]).unwrap_err();
        assert!(err.to_string().contains("invalid duration"), "got: {err}");
    }

    #[test]
    fn parse_duration_arg_supports_compound_units() {
        assert_eq!(parse_duration_arg("90"), Some(Duration::from_secs(90)));
        assert_eq!(parse_duration_arg("500ms"), Some(Duration::from_millis(500)));
        assert_eq!(parse_duration_arg("1h30m"), Some(Duration::from_secs(5_400)));
        assert_eq!(parse_duration_arg("59m59s"), Some(Duration::from_secs(3_599)));
        assert_eq!(parse_duration_arg("1H0M1S"), Some(Duration::from_secs(3_601)));
        assert_eq!(parse_duration_arg("2d"), Some(Duration::from_secs(172_800)));
        assert_eq!(parse_duration_arg("0s"), Some(Duration::ZERO));
    }

    #[test]
    fn parse_duration_arg_rejects_garbage() {
        assert_eq!(parse_duration_arg(""), None);
        assert_eq!(parse_duration_arg("h"), None);
        assert_eq!(parse_duration_arg("1h30"), None);
        assert_eq!(parse_duration_arg("-5m"), None);
        assert_eq!(parse_duration_arg("3w"), None);
        assert_eq!(parse_duration_arg("1.5h"), None);
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hours_and_minutes_compose(hours in 0u64..1_000, minutes in 0u64..60) {
                let raw = format!("{hours}h{minutes}m");
                prop_assert_eq!(
                    parse_duration_arg(&raw),
                    Some(Duration::from_secs(hours * 3_600 + minutes * 60))
                );
            }
        }
    }
}
