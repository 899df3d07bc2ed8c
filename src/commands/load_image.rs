//! `load_image <name>` and `load_image default`.

use crate::terminal::Terminal;

use super::args::BAD_ARITY;
use super::{Command, CommandOptions};

const DEFAULT: &str = "default";

pub struct LoadImage;

impl Command for LoadImage {
    fn name(&self) -> &'static str {
        "load_image"
    }

    fn help_pages(&self) -> &'static [&'static str] {
        &["Usage: load_image <image.png>\n   or: load_image default\n\nReplaces the canvas with an image from the image directory (see `ls`),\nor with a blank default canvas. Loading can be undone."]
    }

    fn execute(&self, terminal: &mut Terminal, args: &[String], _options: &CommandOptions) -> bool {
        let name = match args {
            [] => {
                terminal.output_error("You need to provide an image name, see `help load_image`.");
                return false;
            }
            [name] => name,
            _ => {
                terminal.output_error(BAD_ARITY);
                return false;
            }
        };

        if name == DEFAULT {
            let blank = terminal.blank();
            terminal
                .canvas_mut()
                .reset(blank.width, blank.height, blank.background);
            terminal.output_success(format!(
                "Loaded the default {}x{} canvas.",
                blank.width, blank.height
            ));
            return true;
        }

        let store = terminal.store().clone();
        if let Err(e) = terminal.canvas_mut().load(&store, name) {
            terminal.output_error(e.to_string());
            return false;
        }
        let (w, h) = terminal.canvas().size();
        terminal.output_success(format!("Loaded `{name}` ({w}x{h})."));
        true
    }

    fn predict(&self, terminal: &Terminal, args: &[String], _options: &CommandOptions) -> Option<String> {
        let [prefix] = args else {
            return args.is_empty().then(|| " image".to_string());
        };
        if prefix == DEFAULT || terminal.store().exists(prefix) {
            return Some(String::new());
        }
        terminal
            .store()
            .names_starting_with(prefix)
            .into_iter()
            .next()
            .or_else(|| DEFAULT.starts_with(prefix.as_str()).then(|| DEFAULT.to_string()))
    }
}
