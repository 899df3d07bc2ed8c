//! Argument validation and prediction shared by the commands.

use crate::canvas::Canvas;
use crate::color::{complete_color_name, create_color, Color};
use crate::terminal::Terminal;

use super::{CommandOptions, OptionKey};

pub const BAD_ARITY: &str = "Bad amount of arguments, see help for options";
pub const INVALID_COORDINATES: &str = "Invalid coordinates.";

/// Why a count-like token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountError {
    Negative,
    Invalid,
}

/// A token made only of ASCII digits.
pub fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a non-negative integer such as a radius or an outline width.
pub fn parse_count(token: &str) -> Result<u32, CountError> {
    if let Some(rest) = token.strip_prefix('-') {
        return if is_digits(rest) {
            Err(CountError::Negative)
        } else {
            Err(CountError::Invalid)
        };
    }
    if !is_digits(token) {
        return Err(CountError::Invalid);
    }
    token.parse().map_err(|_| CountError::Invalid)
}

/// A point inside the canvas.
pub fn coordinate(canvas: &Canvas, x: &str, y: &str) -> Option<(u32, u32)> {
    let x = parse_count(x).ok()?;
    let y = parse_count(y).ok()?;
    canvas.contains(x, y).then_some((x, y))
}

/// Every `(x, y)` pair in `args`, or the first offending pair.
pub fn coordinates<'a>(
    canvas: &Canvas,
    args: &'a [String],
) -> Result<Vec<(u32, u32)>, (&'a str, &'a str)> {
    args.chunks_exact(2)
        .map(|pair| {
            let (x, y) = (pair[0].as_str(), pair[1].as_str());
            coordinate(canvas, x, y).ok_or((x, y))
        })
        .collect()
}

/// Fill, border and border width of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeStyle {
    pub fill: Color,
    pub outline: Option<Color>,
    pub outline_width: u32,
}

impl ShapeStyle {
    /// Fill is `fg` (transparent with `--no-fill`); the border is drawn in
    /// `bg` when `--outline <n>` is given.
    pub fn from_options(options: &CommandOptions) -> Result<Self, String> {
        let fill = if options.has(OptionKey::NoFill) {
            options.fg.with_alpha(0)
        } else {
            options.fg
        };

        let (outline, outline_width) = match options.value(OptionKey::Outline) {
            Some(raw) => match parse_count(raw) {
                Ok(width) => (Some(options.bg), width),
                Err(CountError::Negative) => {
                    return Err(format!("Outline size must not be negative: {raw}"))
                }
                Err(CountError::Invalid) => return Err("Invalid outline size.".to_string()),
            },
            None => (None, 0),
        };

        Ok(Self {
            fill,
            outline,
            outline_width,
        })
    }

    /// Fill handed to the canvas; a fully transparent fill is skipped.
    pub fn canvas_fill(&self) -> Option<Color> {
        (self.fill.a > 0).then_some(self.fill)
    }
}

/// Parse the joined arguments of `fg`, `bg` and `terminal_background`,
/// reporting failures on the terminal.
pub fn color_argument(terminal: &mut Terminal, command: &str, args: &[String]) -> Option<Color> {
    if args.is_empty() {
        terminal.output_error(format!(
            "You need to provide a color, see `help {command}` for the accepted forms."
        ));
        return None;
    }
    match create_color(&args.join(" ")) {
        Ok(color) => Some(color),
        Err(e) => {
            terminal.output_error(e.to_string());
            None
        }
    }
}

/// Predict a color spec, proposing the channels of `current` for bare
/// numbers and completing color names.
///
/// Text that can neither be completed nor parsed yet predicts `None`.
pub fn predict_color(args: &[String], current: Color) -> Option<String> {
    if args.iter().all(|arg| is_digits(arg)) {
        if !args.iter().all(|arg| arg.parse::<u8>().is_ok()) {
            return None;
        }
        let channels = current.to_array();
        return match args.len() {
            n @ 0..=3 => Some(format!(" {}", channels[n])),
            4 => Some(String::new()),
            _ => None,
        };
    }

    if create_color(&args.join(" ")).is_ok() {
        return Some(String::new());
    }
    match args {
        [single] => complete_color_name(single).map(str::to_string),
        _ => None,
    }
}
