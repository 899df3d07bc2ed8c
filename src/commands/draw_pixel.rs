//! `draw_pixel x y`

use crate::terminal::Terminal;

use super::args::{coordinate, BAD_ARITY, INVALID_COORDINATES};
use super::{Command, CommandOptions, OptionKey};

pub struct DrawPixel;

impl Command for DrawPixel {
    fn name(&self) -> &'static str {
        "draw_pixel"
    }

    fn help_pages(&self) -> &'static [&'static str] {
        &[
            "Usage: draw_pixel <x> <y>\n\nSets one pixel to the foreground color.\n  x, y: coordinates inside the image",
            "Options:\n  --fg <color>: color of the pixel",
        ]
    }

    fn known_options(&self) -> &'static [OptionKey] {
        &[OptionKey::Fg]
    }

    fn execute(&self, terminal: &mut Terminal, args: &[String], options: &CommandOptions) -> bool {
        let [x, y] = args else {
            terminal.output_error(BAD_ARITY);
            return false;
        };
        let Some((x, y)) = coordinate(terminal.canvas(), x, y) else {
            terminal.output_error(INVALID_COORDINATES);
            return false;
        };

        if let Err(e) = terminal.canvas_mut().set_pixel(x, y, options.fg) {
            terminal.output_error(e.to_string());
            return false;
        }
        terminal.output_success(format!("Pixel at {x}x{y} filled with {}.", options.fg));
        true
    }

    fn predict(&self, _terminal: &Terminal, args: &[String], _options: &CommandOptions) -> Option<String> {
        let reply = match args.len() {
            0 => " x",
            1 => " y",
            _ => "",
        };
        Some(reply.to_string())
    }
}
