//! `save_image <name.png> [--overwrite]`

use crate::canvas::is_valid_png_name;
use crate::terminal::Terminal;

use super::args::BAD_ARITY;
use super::{Command, CommandOptions, OptionKey};

pub struct SaveImage;

impl Command for SaveImage {
    fn name(&self) -> &'static str {
        "save_image"
    }

    fn help_pages(&self) -> &'static [&'static str] {
        &["Usage: save_image <image_name.png>\n\nSaves the canvas as a PNG in the image directory.\nAllowed characters: A-Z a-z 0-9 _\nOptions:\n  --overwrite: replace an existing image"]
    }

    fn known_options(&self) -> &'static [OptionKey] {
        &[OptionKey::Overwrite]
    }

    fn execute(&self, terminal: &mut Terminal, args: &[String], options: &CommandOptions) -> bool {
        let [name] = args else {
            terminal.output_error(BAD_ARITY);
            return false;
        };
        if !name.ends_with(".png") {
            terminal.output_error("Please save the image as a .png");
            return false;
        }
        if !is_valid_png_name(name) {
            terminal.output_error("Invalid characters in image name.");
            terminal.output_error("Please check `help save_image` for more information.");
            return false;
        }
        if terminal.store().exists(name) && !options.has(OptionKey::Overwrite) {
            terminal.output_error("This image already exists, use --overwrite to overwrite it.");
            return false;
        }

        if let Err(e) = terminal.canvas().save(terminal.store(), name) {
            terminal.output_error(e.to_string());
            return false;
        }
        terminal.output_success(format!("Image saved as `{name}`."));
        true
    }

    fn predict(&self, terminal: &Terminal, args: &[String], options: &CommandOptions) -> Option<String> {
        let overwriting = options.has(OptionKey::Overwrite);
        match args {
            [] => Some(" name.png".to_string()),
            [name] if name.ends_with(".png") => {
                let clash = terminal.store().exists(name) && !overwriting;
                Some(if clash { " --overwrite" } else { "" }.to_string())
            }
            [prefix] if overwriting => Some(format!("{}.png", stem(prefix))),
            [prefix] => match terminal.store().names_starting_with(prefix).into_iter().next() {
                Some(existing) => Some(format!("{existing} --overwrite")),
                None => Some(format!("{}.png", stem(prefix))),
            },
            _ => None,
        }
    }
}

fn stem(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}
