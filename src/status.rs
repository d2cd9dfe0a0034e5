//! Slack presence status as seen and set by a session.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::duration_words::{format_duration_words, time_until};
use crate::textutil::{cap_chars, or_placeholder};

/// Slack rejects status text longer than this many characters.
pub const MAX_STATUS_TEXT_CHARS: usize = 100;

const PLACEHOLDER: &str = "<none>";

/// Emoji + text + optional expiration.
///
/// `expiration: None` means the status never expires.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    pub emoji: String,
    pub text: String,
    pub expiration: Option<SystemTime>,
}

impl Status {
    /// Build a status, capping `text` at [`MAX_STATUS_TEXT_CHARS`].
    pub fn new(
        emoji: impl Into<String>,
        text: impl AsRef<str>,
        expiration: Option<SystemTime>,
    ) -> Self {
        Self {
            emoji: emoji.into(),
            text: cap_chars(text.as_ref(), MAX_STATUS_TEXT_CHARS).into_owned(),
            expiration,
        }
    }

    /// Expiration as Slack epoch seconds; `0` means never.
    pub fn expiration_epoch(&self) -> i64 {
        self.expiration
            .and_then(|at| at.duration_since(UNIX_EPOCH).ok())
            .map(|since| since.as_secs() as i64)
            .unwrap_or(0)
    }

    /// Inverse of [`Status::expiration_epoch`]; non-positive values mean never.
    pub fn expiration_from_epoch(epoch: i64) -> Option<SystemTime> {
        (epoch > 0).then(|| UNIX_EPOCH + Duration::from_secs(epoch as u64))
    }

    /// Display rows (`Emoji`, `Text`, `Expires`) relative to `now`.
    pub fn display_fields(&self, now: SystemTime) -> [(&'static str, String); 3] {
        [
            ("Emoji", or_placeholder(&self.emoji, PLACEHOLDER).to_string()),
            ("Text", or_placeholder(&self.text, PLACEHOLDER).to_string()),
            ("Expires", self.expiration_text(now)),
        ]
    }

    fn expiration_text(&self, now: SystemTime) -> String {
        match self.expiration {
            None => PLACEHOLDER.to_string(),
            Some(at) => format!(
                "{} ({} from now)",
                httpdate::fmt_http_date(at),
                format_duration_words(time_until(at, now))
            ),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.display_fields(SystemTime::now());
        for (idx, (key, value)) in rows.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}
