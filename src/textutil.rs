//! UTF-8-safe text capping helpers.
//!
//! Slack counts status text in characters, so caps here work on `char`s
//! rather than bytes to avoid cutting inside a multi-byte emoji.

use std::borrow::Cow;

/// Return at most `max_chars` characters of `text`, borrowing when no cut is needed.
pub fn cap_chars(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => Cow::Owned(text[..end].to_string()),
        None => Cow::Borrowed(text),
    }
}

/// Return `fallback` for blank text, otherwise the text itself.
pub fn or_placeholder<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.trim().is_empty() {
        fallback
    } else {
        text
    }
}
