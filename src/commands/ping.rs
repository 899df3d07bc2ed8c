//! `ping`: connectivity check for the command line itself.

use crate::terminal::Terminal;

use super::{Command, CommandOptions};

pub struct Ping;

impl Command for Ping {
    fn name(&self) -> &'static str {
        "ping"
    }

    fn help_pages(&self) -> &'static [&'static str] {
        &["Usage: ping [text...]\n\nAnswers with pong, echoing any arguments."]
    }

    fn execute(&self, terminal: &mut Terminal, args: &[String], _options: &CommandOptions) -> bool {
        if args.is_empty() {
            terminal.output_success("pong");
        } else {
            terminal.output_success(format!("pong: {}", args.join(", ")));
        }
        true
    }

    fn predict(&self, _terminal: &Terminal, _args: &[String], _options: &CommandOptions) -> Option<String> {
        Some(String::new())
    }
}
