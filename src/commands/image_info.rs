//! `image_info [x y]`

use crate::terminal::Terminal;

use super::args::{coordinate, BAD_ARITY, INVALID_COORDINATES};
use super::{Command, CommandOptions};

pub struct ImageInfo;

impl Command for ImageInfo {
    fn name(&self) -> &'static str {
        "image_info"
    }

    fn help_pages(&self) -> &'static [&'static str] {
        &["Usage: image_info\n   or: image_info <x> <y>\n\nWithout arguments shows the size, edit count and number of colors.\nWith coordinates shows the color of that pixel."]
    }

    fn execute(&self, terminal: &mut Terminal, args: &[String], _options: &CommandOptions) -> bool {
        match args {
            [] => {
                let info = terminal.canvas().info();
                terminal.output_info("Image info:");
                terminal.output_info(format!("Size: {}x{} pixels", info.size.0, info.size.1));
                terminal.output_info(format!("Edit count: {}", info.edits));
                if let Some(colors) = info.colors {
                    terminal.output_info(format!("Colors: {colors}"));
                }
                true
            }
            [x, y] => {
                let Some((x, y)) = coordinate(terminal.canvas(), x, y) else {
                    terminal.output_error(INVALID_COORDINATES);
                    return false;
                };
                let color = match terminal.canvas().get_pixel(x, y) {
                    Ok(color) => color,
                    Err(e) => {
                        terminal.output_error(e.to_string());
                        return false;
                    }
                };
                terminal.output_info(format!("Pixel info (x: {x} y: {y}):"));
                terminal.output_info(format!("Color: {color} {}", color.hex()));
                true
            }
            _ => {
                terminal.output_error(BAD_ARITY);
                false
            }
        }
    }

    fn predict(&self, _terminal: &Terminal, args: &[String], _options: &CommandOptions) -> Option<String> {
        let reply = match args.len() {
            0 => " x y",
            1 => " y",
            2 => "",
            _ => return None,
        };
        Some(reply.to_string())
    }
}
