//! Directory-backed image store used by `ls`, `load_image` and `save_image`.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use tracing::{debug, warn};

use crate::error::CanvasError;

/// A file in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone)]
pub struct ImageStore {
    directory: PathBuf,
}

/// `true` for `<[A-Za-z0-9_]+>.png`.
pub fn is_valid_png_name(name: &str) -> bool {
    match name.strip_suffix(".png") {
        Some(stem) => {
            !stem.is_empty() && stem.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> CanvasError + '_ {
    move |source| CanvasError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl ImageStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Resolve a bare file name inside the store.
    ///
    /// Names that would escape the directory are rejected.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, CanvasError> {
        let escapes = name.is_empty()
            || name.contains(['/', '\\'])
            || name == "."
            || name == "..";
        if escapes {
            return Err(CanvasError::InvalidName(name.to_string()));
        }
        Ok(self.directory.join(name))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).map(|p| p.is_file()).unwrap_or(false)
    }

    /// Files in the store sorted by name. A missing directory is empty.
    pub fn list(&self) -> Result<Vec<StoredImage>, CanvasError> {
        if !self.directory.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&self.directory).map_err(io_error(&self.directory))?;

        let mut images = Vec::new();
        for entry in entries {
            let entry = entry.map_err(io_error(&self.directory))?;
            let metadata = match entry.metadata() {
                Ok(m) if m.is_file() => m,
                Ok(_) => continue,
                Err(e) => {
                    warn!(path = ?entry.path(), error = %e, "Skipping unreadable store entry");
                    continue;
                }
            };
            images.push(StoredImage {
                name: entry.file_name().to_string_lossy().to_string(),
                size: metadata.len(),
            });
        }
        images.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(images)
    }

    /// Names in the store starting with `prefix`.
    pub fn names_starting_with(&self, prefix: &str) -> Vec<String> {
        self.list()
            .unwrap_or_default()
            .into_iter()
            .map(|image| image.name)
            .filter(|name| name.starts_with(prefix))
            .collect()
    }

    pub fn load(&self, name: &str) -> Result<RgbaImage, CanvasError> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Err(CanvasError::NotFound(name.to_string()));
        }
        let image = image::open(&path)?.to_rgba8();
        debug!(path = ?path, width = image.width(), height = image.height(), "Loaded image");
        Ok(image)
    }

    pub fn save(&self, name: &str, image: &RgbaImage) -> Result<PathBuf, CanvasError> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.directory).map_err(io_error(&self.directory))?;
        image.save_with_format(&path, ImageFormat::Png)?;
        debug!(path = ?path, "Saved image");
        Ok(path)
    }
}
