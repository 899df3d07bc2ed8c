//! `draw_line x1 y1 x2 y2`

use crate::terminal::Terminal;

use super::args::{coordinate, BAD_ARITY};
use super::{Command, CommandOptions, OptionKey};

pub struct DrawLine;

impl Command for DrawLine {
    fn name(&self) -> &'static str {
        "draw_line"
    }

    fn help_pages(&self) -> &'static [&'static str] {
        &[
            "Usage: draw_line <x1> <y1> <x2> <y2>\n\n  x1, y1: starting coordinates\n  x2, y2: ending coordinates",
            "Options:\n  --fg <color>: color of the line",
        ]
    }

    fn known_options(&self) -> &'static [OptionKey] {
        &[OptionKey::Fg]
    }

    fn execute(&self, terminal: &mut Terminal, args: &[String], options: &CommandOptions) -> bool {
        let [x1, y1, x2, y2] = args else {
            terminal.output_error(BAD_ARITY);
            return false;
        };
        let Some(from) = coordinate(terminal.canvas(), x1, y1) else {
            terminal.output_error("Invalid starting coordinates.");
            return false;
        };
        let Some(to) = coordinate(terminal.canvas(), x2, y2) else {
            terminal.output_error("Invalid ending coordinates.");
            return false;
        };

        terminal.canvas_mut().draw_line(from, to, options.fg);
        terminal.output_success(format!(
            "Line from {}x{} to {}x{} with {}.",
            from.0, from.1, to.0, to.1, options.fg
        ));
        true
    }

    fn predict(&self, _terminal: &Terminal, args: &[String], _options: &CommandOptions) -> Option<String> {
        let reply = match args.len() {
            0 => " x1",
            1 => " y1",
            2 => " x2",
            3 => " y2",
            _ => "",
        };
        Some(reply.to_string())
    }
}
