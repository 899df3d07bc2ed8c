//! `fg <color>`: default drawing color.

use crate::terminal::Terminal;

use super::args::{color_argument, predict_color};
use super::{Command, CommandOptions};

pub struct Foreground;

impl Command for Foreground {
    fn name(&self) -> &'static str {
        "fg"
    }

    fn help_pages(&self) -> &'static [&'static str] {
        &[
            "Usage: fg <color>\n\nSets the foreground color used to fill shapes and draw pixels and lines.",
            "Color forms:\n  name:        gold, navy, transparent, ...\n  hex:         #f80, #ff8000, #ff800080\n  numbers:     255 128 0 [alpha]\n  rgb(a):      rgb(255, 128, 0), rgba(255 128 0 128)\n  hsv(a):      hsv(30, 100, 100), hsva(30 100 100 128)",
        ]
    }

    fn execute(&self, terminal: &mut Terminal, args: &[String], _options: &CommandOptions) -> bool {
        let Some(color) = color_argument(terminal, self.name(), args) else {
            return false;
        };
        terminal.set_foreground(color);
        terminal.output_success(format!("Foreground color set to {color} ({}).", color.hex()));
        true
    }

    fn predict(&self, terminal: &Terminal, args: &[String], _options: &CommandOptions) -> Option<String> {
        predict_color(args, terminal.foreground())
    }
}
