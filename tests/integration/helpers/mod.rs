//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use termpaint::{BlankCanvas, Color, ImageStore, OutputKind, Terminal};

pub const WIDTH: u32 = 32;
pub const HEIGHT: u32 = 16;

/// A black 32x16 session storing images under `temp`.
pub fn session(temp: &TempDir) -> Terminal {
    let blank = BlankCanvas {
        width: WIDTH,
        height: HEIGHT,
        background: Color::BLACK,
    };
    Terminal::new(blank, ImageStore::new(temp.path().join("images")))
}

/// Drain the transcript into `(kind, text)` pairs.
pub fn drain(terminal: &mut Terminal) -> Vec<(OutputKind, String)> {
    terminal
        .drain_output()
        .into_iter()
        .map(|line| (line.kind, line.text))
        .collect()
}

/// Drain only the error texts.
pub fn errors(terminal: &mut Terminal) -> Vec<String> {
    drain(terminal)
        .into_iter()
        .filter(|(kind, _)| *kind == OutputKind::Error)
        .map(|(_, text)| text)
        .collect()
}

/// Config file pointing the image store into `temp`.
pub fn write_config(temp: &TempDir, width: u32, height: u32) -> PathBuf {
    let images = temp.path().join("images");
    let path = temp.path().join("config.toml");
    let contents = format!(
        "[canvas]\nwidth = {width}\nheight = {height}\n\n[storage]\ndirectory = {:?}\n",
        images.display().to_string()
    );
    fs::write(&path, contents).expect("Failed to write config");
    path
}

/// Write a script file into `dir`.
pub fn write_script(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, lines.join("\n")).expect("Failed to write script");
    path
}
