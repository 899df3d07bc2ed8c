//! Error types shared across the library.
//!
//! Command failures are reported to the user through the terminal
//! transcript; these types carry the messages up to that boundary.

use std::path::PathBuf;

/// Errors produced while resolving a textual color spec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("Invalid color: `{0}`")]
    InvalidColor(String),

    #[error("{channel} must be between {min} and {max}: {value}")]
    OutOfRange {
        channel: &'static str,
        min: i64,
        max: i64,
        value: String,
    },
}

/// Errors produced by the canvas and the image store.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("Image not found: {0}")]
    NotFound(String),

    #[error("Cannot be undone.")]
    NothingToUndo,

    #[error("Coordinates {x}x{y} are outside the {width}x{height} canvas")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Invalid image name: {0}")]
    InvalidName(String),

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),
}
