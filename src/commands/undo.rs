//! `undo`: one step back, once.

use crate::terminal::Terminal;

use super::args::BAD_ARITY;
use super::{Command, CommandOptions};

pub struct Undo;

impl Command for Undo {
    fn name(&self) -> &'static str {
        "undo"
    }

    fn help_pages(&self) -> &'static [&'static str] {
        &["Usage: undo\n\nReverts the last edit. Only the most recent edit can be undone, and only once."]
    }

    fn execute(&self, terminal: &mut Terminal, args: &[String], _options: &CommandOptions) -> bool {
        if !args.is_empty() {
            terminal.output_error(BAD_ARITY);
            return false;
        }
        match terminal.canvas_mut().undo() {
            Ok(()) => {
                terminal.output_success("Undone.");
                true
            }
            Err(e) => {
                terminal.output_error(e.to_string());
                false
            }
        }
    }

    fn predict(&self, _terminal: &Terminal, args: &[String], _options: &CommandOptions) -> Option<String> {
        args.is_empty().then(String::new)
    }
}
