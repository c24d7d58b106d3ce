//! Standard output handle for the report.
//!
//! The terminal's capabilities are probed once in [`Console::setup`]; every
//! later write goes through the returned handle, which falls back to ASCII
//! tags where emoji cannot be shown.

use std::fmt::Display;
use std::io;

use console::{Emoji, Style, Term};

pub static STATS: Emoji<'_, '_> = Emoji("📊 ", "[STATS] ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[INFO] ");
pub static OK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[WARN] ");
pub static ERROR: Emoji<'_, '_> = Emoji("❌ ", "[ERROR] ");

/// Styled, capability-aware writer for stdout.
///
/// Errors go to stdout too, next to the report they end; logs use stderr.
pub struct Console {
    out: Term,
    emoji: bool,
    tag_style: Style,
    error_style: Style,
}

impl Console {
    /// Probe the terminal and build the handle. Call before any output.
    pub fn setup() -> Self {
        let out = Term::stdout();
        let emoji = out.features().wants_emoji();
        Self {
            out,
            emoji,
            tag_style: Style::new().bold(),
            error_style: Style::new().red().bold(),
        }
    }

    fn tag(&self, tag: &Emoji<'_, '_>) -> String {
        let raw = if self.emoji { tag.0 } else { tag.1 };
        raw.to_string()
    }

    /// Write a tagged line to stdout.
    pub fn tagged(&self, tag: &Emoji<'_, '_>, message: impl Display) -> io::Result<()> {
        let tag = self.tag(tag);
        self.out.write_line(&format!(
            "{}{}",
            self.tag_style.apply_to(tag),
            message
        ))
    }

    /// Write an untagged line to stdout.
    pub fn line(&self, message: impl Display) -> io::Result<()> {
        self.out.write_line(&message.to_string())
    }

    /// Write a tagged error line to stdout. Failures to write are ignored.
    pub fn error(&self, message: impl Display) {
        let tag = self.tag(&ERROR);
        let _ = self.out.write_line(&format!(
            "{}{}",
            self.error_style.apply_to(tag),
            message
        ));
    }
}
