//! `draw_circle x y radius`

use crate::terminal::Terminal;

use super::args::{coordinate, parse_count, CountError, ShapeStyle, BAD_ARITY, INVALID_COORDINATES};
use super::{Command, CommandOptions, OptionKey};

pub struct DrawCircle;

impl Command for DrawCircle {
    fn name(&self) -> &'static str {
        "draw_circle"
    }

    fn help_pages(&self) -> &'static [&'static str] {
        &[
            "Usage: draw_circle <x> <y> <radius>\n\n  x, y: centre inside the image\n  radius: non-negative integer",
            "Options:\n  --fg <color>: fill color\n  --bg <color>: outline color\n  --no-fill: draw only the outline\n  --outline <int>: outline width",
        ]
    }

    fn known_options(&self) -> &'static [OptionKey] {
        &[OptionKey::Fg, OptionKey::Bg, OptionKey::NoFill, OptionKey::Outline]
    }

    fn execute(&self, terminal: &mut Terminal, args: &[String], options: &CommandOptions) -> bool {
        let [x, y, radius] = args else {
            terminal.output_error(BAD_ARITY);
            return false;
        };
        let Some((x, y)) = coordinate(terminal.canvas(), x, y) else {
            terminal.output_error(INVALID_COORDINATES);
            return false;
        };
        let radius = match parse_count(radius) {
            Ok(radius) => radius,
            Err(CountError::Negative) => {
                terminal.output_error(format!("Radius must not be negative: {radius}"));
                return false;
            }
            Err(CountError::Invalid) => {
                terminal.output_error("Invalid radius.");
                return false;
            }
        };
        let style = match ShapeStyle::from_options(options) {
            Ok(style) => style,
            Err(message) => {
                terminal.output_error(message);
                return false;
            }
        };

        terminal.canvas_mut().draw_circle(
            (x, y, radius),
            style.canvas_fill(),
            style.outline,
            style.outline_width,
        );
        terminal.output_success(format!(
            "Circle at {x}x{y} radius {radius} filled with {}.",
            style.fill
        ));
        true
    }

    fn predict(&self, _terminal: &Terminal, args: &[String], _options: &CommandOptions) -> Option<String> {
        let reply = match args.len() {
            0 => " x",
            1 => " y",
            2 => " radius",
            _ => "",
        };
        Some(reply.to_string())
    }
}
