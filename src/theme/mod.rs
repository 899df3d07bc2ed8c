//! Theme configuration for CLI output
//!
//! Centralizes the colors used for transcript lines, predictions and
//! clap help, plus the `NO_COLOR` switch.

use crossterm::style::Color;

pub mod cli;

pub use cli::render_line;

/// Theme configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary text color (info lines)
    pub text_primary: Color,
    /// Secondary/dimmed text color (predictions, prompts)
    pub text_secondary: Color,
    /// Accent color for highlights
    pub accent: Color,
    pub error: Color,
    pub success: Color,
    /// When false every helper returns the text unchanged
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: Color::Grey,
            text_secondary: Color::DarkGrey,
            accent: Color::Green,
            error: Color::Red,
            success: Color::Green,
            enabled: true,
        }
    }
}

impl Theme {
    /// Same palette with styling switched off.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// `true` unless `NO_COLOR` is set to a non-empty value.
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty())
}

/// Theme for this process, honoring `NO_COLOR`.
pub fn current_theme() -> Theme {
    if color_enabled() {
        Theme::default()
    } else {
        Theme::plain()
    }
}
