//! The image being edited.
//!
//! A [`Canvas`] owns an RGBA raster, an edit counter and a single backup
//! slot. Every mutating call snapshots the current state into the slot
//! first, so [`Canvas::undo`] can step back exactly once.

pub mod draw;
pub mod store;

use std::collections::HashSet;

use image::RgbaImage;
use tracing::trace;

use crate::color::Color;
use crate::error::CanvasError;

pub use store::{is_valid_png_name, ImageStore, StoredImage};

/// Summary returned by [`Canvas::info`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasInfo {
    pub size: (u32, u32),
    pub edits: u32,
    /// Number of distinct colors, or `None` past 256.
    pub colors: Option<usize>,
}

/// Size and color of a fresh canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlankCanvas {
    pub width: u32,
    pub height: u32,
    pub background: Color,
}

impl BlankCanvas {
    pub fn to_canvas(self) -> Canvas {
        Canvas::new(self.width, self.height, self.background)
    }
}

#[derive(Debug, Clone)]
struct Backup {
    image: RgbaImage,
    edits: u32,
}

#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
    edits: u32,
    backup: Option<Backup>,
}

impl Canvas {
    /// A blank canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self::from_image(RgbaImage::from_pixel(width, height, background.into()))
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            image,
            edits: 0,
            backup: None,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.image.width() && y < self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn edits(&self) -> u32 {
        self.edits
    }

    pub fn undo_available(&self) -> bool {
        self.backup.is_some()
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<(), CanvasError> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.image.width(),
                height: self.image.height(),
            })
        }
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Color, CanvasError> {
        self.check_bounds(x, y)?;
        Ok(Color::from(*self.image.get_pixel(x, y)))
    }

    /// Snapshot, apply `op`, then count the edit.
    fn edit(&mut self, op: impl FnOnce(&mut RgbaImage)) {
        self.backup = Some(Backup {
            image: self.image.clone(),
            edits: self.edits,
        });
        op(&mut self.image);
        self.edits += 1;
    }

    /// Outline widths beyond the canvas extent paint nothing new.
    fn clamp_width(&self, width: u32) -> i64 {
        i64::from(width.min(self.image.width().max(self.image.height())))
    }

    /// Write `color` exactly, without blending.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<(), CanvasError> {
        self.check_bounds(x, y)?;
        trace!(x, y, color = %color, "set_pixel");
        self.edit(|img| img.put_pixel(x, y, color.into()));
        Ok(())
    }

    pub fn draw_line(&mut self, from: (u32, u32), to: (u32, u32), color: Color) {
        trace!(?from, ?to, color = %color, "draw_line");
        self.edit(|img| {
            draw::line(
                img,
                i64::from(from.0),
                i64::from(from.1),
                i64::from(to.0),
                i64::from(to.1),
                color,
            )
        });
    }

    pub fn fill_rect(
        &mut self,
        (x, y, w, h): (u32, u32, u32, u32),
        fill: Option<Color>,
        outline: Option<Color>,
        outline_width: u32,
    ) {
        trace!(x, y, w, h, outline_width, "fill_rect");
        let width = self.clamp_width(outline_width);
        let rect = (i64::from(x), i64::from(y), i64::from(w), i64::from(h));
        self.edit(|img| draw::rect(img, rect, fill, outline, width));
    }

    pub fn draw_circle(
        &mut self,
        (cx, cy, radius): (u32, u32, u32),
        fill: Option<Color>,
        outline: Option<Color>,
        outline_width: u32,
    ) {
        trace!(cx, cy, radius, outline_width, "draw_circle");
        let width = self.clamp_width(outline_width);
        let shape = (i64::from(cx), i64::from(cy), i64::from(radius));
        self.edit(|img| draw::circle(img, shape, fill, outline, width));
    }

    pub fn draw_polygon(
        &mut self,
        points: &[(u32, u32)],
        fill: Option<Color>,
        outline: Option<Color>,
        outline_width: u32,
    ) {
        trace!(points = points.len(), outline_width, "draw_polygon");
        let width = self.clamp_width(outline_width);
        let points: Vec<(i64, i64)> = points
            .iter()
            .map(|&(x, y)| (i64::from(x), i64::from(y)))
            .collect();
        self.edit(|img| draw::polygon(img, &points, fill, outline, width));
    }

    /// Replace the whole raster, keeping the previous one for undo.
    ///
    /// The edit counter restarts at zero for the new image.
    pub fn replace(&mut self, image: RgbaImage) {
        trace!(width = image.width(), height = image.height(), "replace");
        self.backup = Some(Backup {
            image: std::mem::replace(&mut self.image, image),
            edits: self.edits,
        });
        self.edits = 0;
    }

    /// Load `name` from `store` into the canvas.
    pub fn load(&mut self, store: &ImageStore, name: &str) -> Result<(), CanvasError> {
        let image = store.load(name)?;
        self.replace(image);
        Ok(())
    }

    pub fn save(&self, store: &ImageStore, name: &str) -> Result<(), CanvasError> {
        store.save(name, &self.image)?;
        Ok(())
    }

    /// Reset to a blank `width` x `height` canvas.
    pub fn reset(&mut self, width: u32, height: u32, background: Color) {
        self.replace(RgbaImage::from_pixel(width, height, background.into()));
    }

    /// Restore the state before the last edit. Works once per edit.
    pub fn undo(&mut self) -> Result<(), CanvasError> {
        let backup = self.backup.take().ok_or(CanvasError::NothingToUndo)?;
        self.image = backup.image;
        self.edits = backup.edits;
        trace!(edits = self.edits, "undo");
        Ok(())
    }

    pub fn info(&self) -> CanvasInfo {
        let mut seen = HashSet::new();
        for pixel in self.image.pixels() {
            seen.insert(pixel.0);
            if seen.len() > 256 {
                break;
            }
        }
        CanvasInfo {
            size: self.size(),
            edits: self.edits,
            colors: (seen.len() <= 256).then_some(seen.len()),
        }
    }
}
