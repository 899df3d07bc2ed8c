//! Styled text for CLI output

use crossterm::style::{Color, Stylize};

use super::Theme;
use crate::color::Color as PaintColor;
use crate::terminal::{OutputKind, OutputLine};

impl Theme {
    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn accent_text(&self, text: &str) -> String {
        self.paint(text, self.accent)
    }

    pub fn primary_text(&self, text: &str) -> String {
        self.paint(text, self.text_primary)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(text, self.text_secondary)
    }

    pub fn error_text(&self, text: &str) -> String {
        self.paint(text, self.error)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(text, self.success)
    }

    /// Text drawn over the terminal display colors set by
    /// `terminal_background`.
    pub fn display_text(&self, text: &str, background: PaintColor, ink: PaintColor) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let rgb = |c: PaintColor| Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        };
        text.with(rgb(ink)).on(rgb(background)).to_string()
    }
}

/// Render one transcript line for the terminal.
pub fn render_line(theme: &Theme, line: &OutputLine) -> String {
    match line.kind {
        OutputKind::Info => theme.primary_text(&line.text),
        OutputKind::Success => theme.success_text(&line.text),
        OutputKind::Error => theme.error_text(&line.text),
    }
}
