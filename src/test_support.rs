//! Fixtures for in-crate unit tests.

use tempfile::TempDir;

use crate::canvas::{BlankCanvas, ImageStore};
use crate::color::Color;
use crate::terminal::Terminal;

pub const WIDTH: u32 = 20;
pub const HEIGHT: u32 = 10;

/// A 20x10 black session whose image store lives in a temp directory.
/// Keep the directory alive for the duration of the test.
pub fn terminal() -> (Terminal, TempDir) {
    let dir = TempDir::new().expect("create temp dir");
    let blank = BlankCanvas {
        width: WIDTH,
        height: HEIGHT,
        background: Color::BLACK,
    };
    (Terminal::new(blank, ImageStore::new(dir.path())), dir)
}

/// Text of every drained line.
pub fn texts(terminal: &mut Terminal) -> Vec<String> {
    terminal
        .drain_output()
        .into_iter()
        .map(|line| line.text)
        .collect()
}
