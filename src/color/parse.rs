//! Color spec parsing.
//!
//! Accepted notations, tried in order:
//! * `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! * a named color (`gold`, `navy`, ...)
//! * three or four bare integers: `255 100 0`, `10,20,30,40`
//! * `rgb(...)` / `rgba(...)` wrapping the same integer list
//! * `hsv(h, s, v[, a])` / `hsva(...)` with `h` in degrees and `s`/`v` in percent
//!
//! Functional and named forms are case-insensitive.

use super::model::Color;
use super::names::named_color;
use crate::error::ColorError;

const RGBA_CHANNELS: [&str; 4] = ["r", "g", "b", "a"];

/// Resolve a color spec into a [`Color`].
pub fn create_color(text: &str) -> Result<Color, ColorError> {
    let spec = text.trim();
    let invalid = || ColorError::InvalidColor(spec.to_string());

    if spec.is_empty() {
        return Err(invalid());
    }

    if let Some(hex) = spec.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }

    if let Some(color) = named_color(spec) {
        return Ok(color);
    }

    if let Some(parts) = integer_list(spec) {
        return rgba_from_parts(&parts);
    }

    let lower = spec.to_ascii_lowercase();
    if let Some(body) = function_body(&lower, &["rgba", "rgb"]) {
        let parts = integer_list(body).ok_or_else(invalid)?;
        return rgba_from_parts(&parts);
    }
    if let Some(body) = function_body(&lower, &["hsva", "hsv"]) {
        let parts = split_components(body);
        if !(parts.len() == 3 || parts.len() == 4) || !parts.iter().all(|p| is_number(p)) {
            return Err(invalid());
        }
        return hsva_from_parts(&parts);
    }

    Err(invalid())
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        create_color(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        create_color(value)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let nibble = |c: u8| -> Option<u8> { (c as char).to_digit(16).map(|d| d as u8) };
    let bytes = hex.as_bytes();

    let channels: Vec<u8> = match bytes.len() {
        3 | 4 => bytes
            .iter()
            .map(|&c| nibble(c).map(|n| n * 17))
            .collect::<Option<_>>()?,
        6 | 8 => bytes
            .chunks(2)
            .map(|pair| Some(nibble(pair[0])? << 4 | nibble(pair[1])?))
            .collect::<Option<_>>()?,
        _ => return None,
    };

    let a = channels.get(3).copied().unwrap_or(255);
    Some(Color::new(channels[0], channels[1], channels[2], a))
}

/// Strip `name(` ... `)` for the first matching function name.
fn function_body<'a>(lower: &'a str, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| {
        lower
            .strip_prefix(name)
            .and_then(|rest| rest.trim_start().strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'))
    })
}

/// Split on commas when present, otherwise on whitespace.
fn split_components(body: &str) -> Vec<&str> {
    if body.contains(',') {
        body.split(',').map(str::trim).collect()
    } else {
        body.split_whitespace().collect()
    }
}

/// Three or four integer tokens, or `None` when the text is not such a list.
fn integer_list(body: &str) -> Option<Vec<&str>> {
    let parts = split_components(body);
    let matches = (parts.len() == 3 || parts.len() == 4) && parts.iter().all(|p| is_integer(p));
    matches.then_some(parts)
}

fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix(['-', '+']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_number(token: &str) -> bool {
    let body = token.strip_prefix(['-', '+']).unwrap_or(token);
    let mut dots = 0;
    let mut digits = 0;
    for b in body.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

fn rgba_from_parts(parts: &[&str]) -> Result<Color, ColorError> {
    let mut channels = [255u8; 4];
    for (slot, (raw, name)) in channels.iter_mut().zip(parts.iter().zip(RGBA_CHANNELS)) {
        *slot = checked_channel(name, raw)?;
    }
    Ok(Color::from(channels))
}

fn hsva_from_parts(parts: &[&str]) -> Result<Color, ColorError> {
    let h = checked_float("h", parts[0], 360)?;
    let s = checked_float("s", parts[1], 100)?;
    let v = checked_float("v", parts[2], 100)?;
    let a = match parts.get(3) {
        Some(raw) if is_integer(raw) => checked_channel("a", raw)?,
        Some(_) => return Err(ColorError::InvalidColor(parts.join(", "))),
        None => 255,
    };
    Ok(Color::from_hsv(h, s, v, a))
}

fn checked_channel(channel: &'static str, raw: &str) -> Result<u8, ColorError> {
    raw.parse::<i64>()
        .ok()
        .filter(|v| (0..=255).contains(v))
        .map(|v| v as u8)
        .ok_or_else(|| out_of_range(channel, 255, raw))
}

fn checked_float(channel: &'static str, raw: &str, max: i64) -> Result<f64, ColorError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| (0.0..=max as f64).contains(v))
        .ok_or_else(|| out_of_range(channel, max, raw))
}

fn out_of_range(channel: &'static str, max: i64, raw: &str) -> ColorError {
    ColorError::OutOfRange {
        channel,
        min: 0,
        max,
        value: raw.to_string(),
    }
}
