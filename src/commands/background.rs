//! `bg <color>`: default outline color.

use crate::terminal::Terminal;

use super::args::{color_argument, predict_color};
use super::{Command, CommandOptions};

pub struct Background;

impl Command for Background {
    fn name(&self) -> &'static str {
        "bg"
    }

    fn help_pages(&self) -> &'static [&'static str] {
        &["Usage: bg <color>\n\nSets the background color used for shape outlines.\nAccepts the same color forms as `fg`, e.g. bg rgb(255, 100, 0)"]
    }

    fn execute(&self, terminal: &mut Terminal, args: &[String], _options: &CommandOptions) -> bool {
        let Some(color) = color_argument(terminal, self.name(), args) else {
            return false;
        };
        terminal.set_background(color);
        terminal.output_success(format!("Background color set to {color} ({}).", color.hex()));
        true
    }

    fn predict(&self, terminal: &Terminal, args: &[String], _options: &CommandOptions) -> Option<String> {
        predict_color(args, terminal.background())
    }
}
