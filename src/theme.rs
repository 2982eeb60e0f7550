//! Terminal color theme.
//!
//! Headings are magenta, interface labels green, the public address white and
//! errors red. A disabled theme returns text untouched so output can be piped
//! or compared verbatim.

use std::io;

use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;

/// Section headings and the lookup banner.
pub const HEADING: Color = Color::Magenta;
/// Interface name labels.
pub const LABEL: Color = Color::Green;
/// Highlighted values (the public address).
pub const VALUE: Color = Color::White;
/// Error messages.
pub const ERROR: Color = Color::Red;

/// Applies the palette above, or nothing when colors are disabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    enabled: bool,
}

impl Theme {
    /// Colors on only if requested, `NO_COLOR` is unset, and stdout is a terminal.
    #[must_use]
    pub fn detect(requested: bool) -> Self {
        let enabled =
            requested && std::env::var_os("NO_COLOR").is_none() && io::stdout().is_tty();
        Self { enabled }
    }

    /// A theme that never emits escape sequences.
    #[must_use]
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn heading(self, text: &str) -> String {
        self.paint(text, HEADING)
    }

    #[must_use]
    pub fn label(self, text: &str) -> String {
        self.paint(text, LABEL)
    }

    #[must_use]
    pub fn value(self, text: &str) -> String {
        self.paint(text, VALUE)
    }

    #[must_use]
    pub fn error(self, text: &str) -> String {
        self.paint(text, ERROR)
    }

    fn paint(self, text: &str, color: Color) -> String {
        if self.enabled {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}
