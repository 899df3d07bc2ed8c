//! termpaint library
//!
//! A pixel canvas edited through a typed command line: color parsing,
//! drawing primitives, the command registry, the dispatcher and the
//! completion predictor.

pub mod canvas;
pub mod cli;
pub mod color;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod terminal;
pub mod theme;

#[cfg(test)]
mod test_support;

pub use canvas::{BlankCanvas, Canvas, CanvasInfo, ImageStore, StoredImage};
pub use color::{create_color, Color, Hsv};
pub use commands::{Command, CommandOptions, OptionKey, Registry};
pub use config::Config;
pub use error::{CanvasError, ColorError};
pub use terminal::{OutputKind, OutputLine, Terminal};
