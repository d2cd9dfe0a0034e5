//! Terminal output for session progress.
//!
//! `RenderSink` is the contract the session controller writes to. `Renderer`
//! is the crossterm-styled implementation used by the binary: progress goes to
//! stdout, errors go to stderr alongside tracing output.

use crossterm::style::{Color, Stylize};

pub const INDENT: &str = "  ";
pub const GLYPH_SECTION_BULLET: &str = "•";
pub const LABEL_ERROR: &str = "error:";

const COLOR_SECTION_BULLET: Color = Color::DarkGrey;
const COLOR_SECTION_TITLE: Color = Color::White;
const COLOR_ACTIVITY: Color = Color::Grey;
const COLOR_FIELD_KEY: Color = Color::DarkGrey;
const COLOR_FIELD_VALUE: Color = Color::White;
const COLOR_ERROR: Color = Color::Red;

/// Injectable rendering interface used by the session controller.
pub trait RenderSink: Send + Sync {
    /// Render a titled section divider.
    fn section(&self, title: &str);
    /// Render one key/value field row.
    fn field(&self, key: &str, value: &str);
    /// Render lifecycle text.
    fn activity(&self, text: &str);
    /// Render additional detail text.
    fn detail(&self, text: &str);
    fn error(&self, msg: &str);
}

/// Stdout/stderr renderer with optional ANSI styling.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn section_line(&self, title: &str) -> String {
        if self.color {
            format!(
                "{} {}",
                GLYPH_SECTION_BULLET.with(COLOR_SECTION_BULLET),
                title.with(COLOR_SECTION_TITLE).bold()
            )
        } else {
            format!("=== {title} ===")
        }
    }

    fn field_line(&self, key: &str, value: &str) -> String {
        if self.color {
            format!(
                "{INDENT}{} {}",
                format!("{key}:").with(COLOR_FIELD_KEY),
                value.with(COLOR_FIELD_VALUE),
            )
        } else {
            format!("{INDENT}{key}: {value}")
        }
    }

    fn activity_line(&self, text: &str) -> String {
        if self.color {
            format!(
                "{} {}",
                GLYPH_SECTION_BULLET.with(COLOR_SECTION_BULLET),
                text.with(COLOR_ACTIVITY).bold()
            )
        } else {
            text.to_string()
        }
    }

    fn detail_line(&self, text: &str) -> String {
        if self.color {
            format!("{INDENT}{}", text.with(COLOR_ACTIVITY))
        } else {
            format!("{INDENT}{text}")
        }
    }

    fn error_line(&self, msg: &str) -> String {
        if self.color {
            format!("{} {msg}", LABEL_ERROR.with(COLOR_ERROR).bold())
        } else {
            format!("{LABEL_ERROR} {msg}")
        }
    }
}

impl RenderSink for Renderer {
    fn section(&self, title: &str) {
        println!("{}", self.section_line(title));
    }

    fn field(&self, key: &str, value: &str) {
        println!("{}", self.field_line(key, value));
    }

    fn activity(&self, text: &str) {
        println!("{}", self.activity_line(text));
    }

    fn detail(&self, text: &str) {
        println!("{}", self.detail_line(text));
    }

    fn error(&self, msg: &str) {
        eprintln!("{}", self.error_line(msg));
    }
}
