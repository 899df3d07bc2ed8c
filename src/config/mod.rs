//! Configuration management for termpaint

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::color::create_color;

/// Largest canvas side accepted from the config file.
pub const MAX_CANVAS_SIDE: u32 = 8192;

impl Config {
    /// Get the config file path (~/.config/termpaint/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/termpaint)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from the default path, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        io::save_to(self, &Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Check value ranges and color specs.
    pub fn validate(&self) -> Result<(), String> {
        let (w, h) = (self.canvas.width, self.canvas.height);
        if w == 0 || h == 0 {
            return Err(format!("canvas size {}x{} must be at least 1x1", w, h));
        }
        if w > MAX_CANVAS_SIDE || h > MAX_CANVAS_SIDE {
            return Err(format!(
                "canvas size {}x{} exceeds maximum ({}x{})",
                w, h, MAX_CANVAS_SIDE, MAX_CANVAS_SIDE
            ));
        }
        let colors = [
            ("canvas.background", &self.canvas.background),
            ("colors.foreground", &self.colors.foreground),
            ("colors.background", &self.colors.background),
        ];
        for (key, spec) in colors {
            create_color(spec).map_err(|e| format!("{}: {}", key, e))?;
        }
        Ok(())
    }

    /// Expand ~ in the image directory path
    pub fn images_directory(&self) -> PathBuf {
        let dir = &self.storage.directory;
        if let Some(stripped) = dir.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        PathBuf::from(dir)
    }
}
