//! Color model, named colors and color spec parsing.

pub mod model;
pub mod names;
pub mod parse;

pub use model::{Color, Hsv, Lab, Lch, Xyz};
pub use names::{complete_color_name, named_color, NAMED_COLORS};
pub use parse::create_color;
