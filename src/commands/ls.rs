//! `ls`: list the image store.

use crate::terminal::Terminal;

use super::{Command, CommandOptions};

pub struct Ls;

impl Command for Ls {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn help_pages(&self) -> &'static [&'static str] {
        &["Usage: ls\n\nLists the files in the image directory with their sizes.\nTakes no arguments."]
    }

    fn execute(&self, terminal: &mut Terminal, args: &[String], _options: &CommandOptions) -> bool {
        if !args.is_empty() {
            terminal.output_error("No arguments needed.");
            return false;
        }

        let directory = terminal.store().directory().display().to_string();
        let images = match terminal.store().list() {
            Ok(images) => images,
            Err(e) => {
                terminal.output_error(e.to_string());
                return false;
            }
        };

        if images.is_empty() {
            terminal.output_info(format!("No images in {directory}."));
            return true;
        }
        terminal.output_info(format!("Files in {directory}:"));
        for image in images {
            terminal.output_info(format!(
                "  {}  {}",
                image.name,
                humansize::format_size(image.size, humansize::BINARY)
            ));
        }
        true
    }

    fn predict(&self, _terminal: &Terminal, args: &[String], _options: &CommandOptions) -> Option<String> {
        args.is_empty().then(String::new)
    }
}
