//! Style tokens for formatter output
//!
//! Each token maps to a fixed combination of weight and bright ANSI color.
//! Escapes are rendered per call from the formatter's own [`ColorMode`];
//! nothing here touches process-wide `colored` state.

use colored::Color;
use serde::{Deserialize, Serialize};

/// ANSI reset sequence that closes every styled span
pub const RESET: &str = "\x1b[0m";

/// SGR code for bold weight
const BOLD: &str = "1";

/// Visual style of a formatted span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Bold bright blue, used for section headers
    Section,
    /// Bold bright cyan, used for subsection headers
    Subsection,
    /// Bold, no color
    Step,
    /// Bright green
    Success,
    /// Bright red
    Error,
    /// Bright yellow
    Warning,
    /// Bright cyan, used for account addresses
    Account,
}

impl Style {
    /// Weight and foreground color of this token
    const fn parts(self) -> (bool, Option<Color>) {
        match self {
            Self::Section => (true, Some(Color::BrightBlue)),
            Self::Subsection => (true, Some(Color::BrightCyan)),
            Self::Step => (true, None),
            Self::Success => (false, Some(Color::BrightGreen)),
            Self::Error => (false, Some(Color::BrightRed)),
            Self::Warning => (false, Some(Color::BrightYellow)),
            Self::Account => (false, Some(Color::BrightCyan)),
        }
    }

    /// Wrap `text` in this style's escape and a reset, or return it plain
    /// when `enabled` is false.
    #[must_use]
    pub fn paint(self, text: &str, enabled: bool) -> String {
        if !enabled {
            return text.to_string();
        }

        let (bold, color) = self.parts();
        let mut codes = Vec::with_capacity(2);
        if bold {
            codes.push(BOLD.to_string());
        }
        if let Some(color) = color {
            codes.push(color.to_fg_str().into_owned());
        }
        format!("\x1b[{}m{text}{RESET}", codes.join(";"))
    }
}

/// When to emit color escapes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Let `colored` decide from the terminal and `NO_COLOR`/`CLICOLOR`
    Auto,
    /// Always emit escapes, piped or not
    #[default]
    Always,
    /// Never emit escapes
    Never,
}

impl ColorMode {
    /// Whether output rendered under this mode carries escapes.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => colored::control::SHOULD_COLORIZE.should_colorize(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}
