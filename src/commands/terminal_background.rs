//! `terminal_background <color>`: display colors of the terminal itself.

use crate::terminal::Terminal;

use super::args::{color_argument, predict_color};
use super::{Command, CommandOptions};

pub struct TerminalBackground;

impl Command for TerminalBackground {
    fn name(&self) -> &'static str {
        "terminal_background"
    }

    fn help_pages(&self) -> &'static [&'static str] {
        &["Usage: terminal_background <color>\n\nChanges the background color of the terminal display.\nText switches to white on dark backgrounds and black on light ones.\nExample: terminal_background rgb(255, 100, 0)"]
    }

    fn execute(&self, terminal: &mut Terminal, args: &[String], _options: &CommandOptions) -> bool {
        let Some(color) = color_argument(terminal, self.name(), args) else {
            return false;
        };
        terminal.set_display_background(color);
        terminal.output_success(format!(
            "Terminal background set to {}, text {}.",
            color.hex(),
            terminal.display_text().hex()
        ));
        true
    }

    fn predict(&self, terminal: &Terminal, args: &[String], _options: &CommandOptions) -> Option<String> {
        predict_color(args, terminal.display_background())
    }
}
