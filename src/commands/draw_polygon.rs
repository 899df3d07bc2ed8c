//! `draw_polygon x1 y1 x2 y2 x3 y3 ...`

use crate::terminal::Terminal;

use super::args::{coordinates, ShapeStyle, BAD_ARITY};
use super::{Command, CommandOptions, OptionKey};

const MIN_ARGS: usize = 6;

pub struct DrawPolygon;

impl Command for DrawPolygon {
    fn name(&self) -> &'static str {
        "draw_polygon"
    }

    fn help_pages(&self) -> &'static [&'static str] {
        &[
            "Usage: draw_polygon <x1> <y1> <x2> <y2> <x3> <y3> ...\n\n  x, y: coordinates of each corner\nNeeds at least 3 points, so an even number of at least 6 arguments.",
            "Options:\n  --fg <color>: fill color\n  --bg <color>: outline color\n  --no-fill: draw only the outline\n  --outline <int>: outline width",
        ]
    }

    fn known_options(&self) -> &'static [OptionKey] {
        &[OptionKey::Fg, OptionKey::Bg, OptionKey::NoFill, OptionKey::Outline]
    }

    fn execute(&self, terminal: &mut Terminal, args: &[String], options: &CommandOptions) -> bool {
        if args.len() < MIN_ARGS || args.len() % 2 != 0 {
            terminal.output_error(BAD_ARITY);
            return false;
        }
        let points = match coordinates(terminal.canvas(), args) {
            Ok(points) => points,
            Err((x, y)) => {
                terminal.output_error(format!("Invalid coordinates: ({x}, {y})"));
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

        terminal.canvas_mut().draw_polygon(
            &points,
            style.canvas_fill(),
            style.outline,
            style.outline_width,
        );
        terminal.output_success(format!(
            "Drawn {}-sided polygon filled with {}.",
            points.len(),
            style.fill
        ));
        true
    }

    fn predict(&self, _terminal: &Terminal, args: &[String], _options: &CommandOptions) -> Option<String> {
        let reply = if args.len() % 2 == 0 { " x" } else { " y" };
        Some(reply.to_string())
    }
}
