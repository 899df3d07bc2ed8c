//! Named colors accepted by the color parser.

use super::model::Color;

/// Name table, in completion order.
pub const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::rgb(0, 0, 0)),
    ("white", Color::rgb(255, 255, 255)),
    ("red", Color::rgb(255, 0, 0)),
    ("green", Color::rgb(0, 128, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("gray", Color::rgb(128, 128, 128)),
    ("grey", Color::rgb(128, 128, 128)),
    ("maroon", Color::rgb(128, 0, 0)),
    ("olive", Color::rgb(128, 128, 0)),
    ("purple", Color::rgb(128, 0, 128)),
    ("teal", Color::rgb(0, 128, 128)),
    ("navy", Color::rgb(0, 0, 128)),
    ("silver", Color::rgb(192, 192, 192)),
    ("lime", Color::rgb(0, 255, 0)),
    ("orange", Color::rgb(255, 165, 0)),
    ("brown", Color::rgb(165, 42, 42)),
    ("pink", Color::rgb(255, 192, 203)),
    ("gold", Color::rgb(255, 215, 0)),
    ("transparent", Color::new(0, 0, 0, 0)),
];

/// Case-insensitive lookup.
pub fn named_color(name: &str) -> Option<Color> {
    NAMED_COLORS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, color)| *color)
}

/// First color name starting with `prefix` (case-insensitive).
pub fn complete_color_name(prefix: &str) -> Option<&'static str> {
    let prefix = prefix.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .map(|(name, _)| *name)
        .find(|name| name.starts_with(&prefix))
}
