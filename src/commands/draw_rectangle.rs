//! `draw_rectangle x y width height`

use crate::terminal::Terminal;

use super::args::{
    coordinate, parse_count, CountError, ShapeStyle, BAD_ARITY, INVALID_COORDINATES,
};
use super::{Command, CommandOptions, OptionKey};

pub struct DrawRectangle;

impl Command for DrawRectangle {
    fn name(&self) -> &'static str {
        "draw_rectangle"
    }

    fn help_pages(&self) -> &'static [&'static str] {
        &[
            "Usage: draw_rectangle <x> <y> <width> <height>\n\n  x, y: top left corner\n  width, height: size of the rectangle, 0 draws nothing",
            "Options:\n  --fg <color>: fill color\n  --bg <color>: outline color\n  --no-fill: draw only the outline\n  --outline <int>: outline width, drawn inward",
        ]
    }

    fn known_options(&self) -> &'static [OptionKey] {
        &[OptionKey::Fg, OptionKey::Bg, OptionKey::NoFill, OptionKey::Outline]
    }

    fn execute(&self, terminal: &mut Terminal, args: &[String], options: &CommandOptions) -> bool {
        let [x, y, w, h] = args else {
            terminal.output_error(BAD_ARITY);
            return false;
        };
        let Some((x, y)) = coordinate(terminal.canvas(), x, y) else {
            terminal.output_error(INVALID_COORDINATES);
            return false;
        };
        let (w, h) = match (parse_count(w), parse_count(h)) {
            (Ok(w), Ok(h)) => (w, h),
            (Err(CountError::Negative), _) => {
                terminal.output_error(format!("Size must not be negative: {w}"));
                return false;
            }
            (_, Err(CountError::Negative)) => {
                terminal.output_error(format!("Size must not be negative: {h}"));
                return false;
            }
            _ => {
                terminal.output_error("Invalid size.");
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

        terminal.canvas_mut().fill_rect(
            (x, y, w, h),
            style.canvas_fill(),
            style.outline,
            style.outline_width,
        );
        terminal.output_success(format!(
            "Rectangle at {x}x{y} size {w}x{h} filled with {}.",
            style.fill
        ));
        true
    }

    fn predict(&self, _terminal: &Terminal, args: &[String], _options: &CommandOptions) -> Option<String> {
        let reply = match args.len() {
            0 => " x",
            1 => " y",
            2 => " width",
            3 => " height",
            _ => "",
        };
        Some(reply.to_string())
    }
}
