//! Raster primitives over an `RgbaImage`.
//!
//! Coordinates are signed so shapes may extend past the edges; every
//! write is clipped. Shape pixels are composited with source-over, each
//! pixel at most once per shape.

use image::RgbaImage;

use crate::color::Color;

/// Composite `color` over the pixel at `(x, y)` if it is on the image.
pub fn paint(img: &mut RgbaImage, x: i64, y: i64, color: Color) {
    if x < 0 || y < 0 || x >= i64::from(img.width()) || y >= i64::from(img.height()) {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    let dst = Color::from(*img.get_pixel(x, y));
    img.put_pixel(x, y, color.over(dst).into());
}

/// Visit every point of the Bresenham line between two endpoints, inclusive.
pub fn line_points(x1: i64, y1: i64, x2: i64, y2: i64, mut visit: impl FnMut(i64, i64)) {
    let dx = (x2 - x1).abs();
    let dy = -(y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x1, y1);

    loop {
        visit(x, y);
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

pub fn line(img: &mut RgbaImage, x1: i64, y1: i64, x2: i64, y2: i64, color: Color) {
    line_points(x1, y1, x2, y2, |x, y| paint(img, x, y, color));
}

/// Axis-aligned rectangle covering `x..x+w` by `y..y+h`; the outline is
/// drawn inward.
pub fn rect(
    img: &mut RgbaImage,
    (x, y, w, h): (i64, i64, i64, i64),
    fill: Option<Color>,
    outline: Option<Color>,
    outline_width: i64,
) {
    let border = outline.filter(|_| outline_width > 0);
    let (cols, rows) = clip_span(img, (x, x.saturating_add(w)), (y, y.saturating_add(h)));
    for py in rows {
        for px in cols.clone() {
            let on_border = px < x + outline_width
                || px >= x + w - outline_width
                || py < y + outline_width
                || py >= y + h - outline_width;
            let color = match border {
                Some(c) if on_border => Some(c),
                _ => fill,
            };
            if let Some(color) = color {
                paint(img, px, py, color);
            }
        }
    }
}

/// Half-open column and row ranges intersected with the image.
fn clip_span(
    img: &RgbaImage,
    (x0, x1): (i64, i64),
    (y0, y1): (i64, i64),
) -> (std::ops::Range<i64>, std::ops::Range<i64>) {
    let cols = x0.max(0)..x1.min(i64::from(img.width()));
    let rows = y0.max(0)..y1.min(i64::from(img.height()));
    (cols, rows)
}

fn in_disk(d2: i64, radius: i64) -> bool {
    radius >= 0 && d2 <= radius.saturating_mul(radius).saturating_add(radius)
}

/// Disk of `radius` around the centre; the outline is the ring outside
/// `radius - outline_width`.
pub fn circle(
    img: &mut RgbaImage,
    (cx, cy, radius): (i64, i64, i64),
    fill: Option<Color>,
    outline: Option<Color>,
    outline_width: i64,
) {
    let border = outline.filter(|_| outline_width > 0);
    let inner = radius - outline_width;
    let (cols, rows) = clip_span(
        img,
        (cx.saturating_sub(radius), cx.saturating_add(radius) + 1),
        (cy.saturating_sub(radius), cy.saturating_add(radius) + 1),
    );
    for py in rows {
        for px in cols.clone() {
            let d2 = (px - cx).pow(2) + (py - cy).pow(2);
            if !in_disk(d2, radius) {
                continue;
            }
            let color = match border {
                Some(c) if !in_disk(d2, inner) => Some(c),
                _ => fill,
            };
            if let Some(color) = color {
                paint(img, px, py, color);
            }
        }
    }
}

/// Set of pixels inside a clipped bounding box.
struct Mask {
    x0: i64,
    y0: i64,
    w: i64,
    h: i64,
    bits: Vec<bool>,
}

impl Mask {
    fn new(img: &RgbaImage, min: (i64, i64), max: (i64, i64)) -> Self {
        let x0 = min.0.max(0);
        let y0 = min.1.max(0);
        let x1 = max.0.min(i64::from(img.width()) - 1);
        let y1 = max.1.min(i64::from(img.height()) - 1);
        let w = (x1 - x0 + 1).max(0);
        let h = (y1 - y0 + 1).max(0);
        Self {
            x0,
            y0,
            w,
            h,
            bits: vec![false; (w * h) as usize],
        }
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let (lx, ly) = (x - self.x0, y - self.y0);
        (lx >= 0 && ly >= 0 && lx < self.w && ly < self.h).then(|| (ly * self.w + lx) as usize)
    }

    fn set(&mut self, x: i64, y: i64) {
        if let Some(i) = self.index(x, y) {
            self.bits[i] = true;
        }
    }

    fn contains(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some_and(|i| self.bits[i])
    }

    fn points(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(|(i, _)| {
                let i = i as i64;
                (self.x0 + i % self.w, self.y0 + i / self.w)
            })
    }
}

fn edges(points: &[(i64, i64)]) -> impl Iterator<Item = ((i64, i64), (i64, i64))> + '_ {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| (*a, *b))
}

/// Stamp a square brush of side `width` centred on every edge point.
fn stroke(mask: &mut Mask, points: &[(i64, i64)], width: i64) {
    let lo = -(width - 1) / 2;
    let hi = width / 2;
    for ((x1, y1), (x2, y2)) in edges(points) {
        line_points(x1, y1, x2, y2, |x, y| {
            for dy in lo..=hi {
                for dx in lo..=hi {
                    mask.set(x + dx, y + dy);
                }
            }
        });
    }
}

/// Even-odd scanline fill sampled on integer rows, edges included.
fn scanline_fill(mask: &mut Mask, points: &[(i64, i64)]) {
    let (y_min, y_max) = (mask.y0, mask.y0 + mask.h - 1);
    for y in y_min..=y_max {
        let mut crossings: Vec<f64> = edges(points)
            .filter(|((_, ya), (_, yb))| ya != yb && y >= *ya.min(yb) && y < *ya.max(yb))
            .map(|((xa, ya), (xb, yb))| {
                let t = (y - ya) as f64 / (yb - ya) as f64;
                xa as f64 + t * (xb - xa) as f64
            })
            .collect();
        crossings.sort_by(f64::total_cmp);
        for span in crossings.chunks_exact(2) {
            for x in span[0].ceil() as i64..=span[1].floor() as i64 {
                mask.set(x, y);
            }
        }
    }
    stroke(mask, points, 1);
}

/// Closed polygon through `points`.
pub fn polygon(
    img: &mut RgbaImage,
    points: &[(i64, i64)],
    fill: Option<Color>,
    outline: Option<Color>,
    outline_width: i64,
) {
    if points.is_empty() {
        return;
    }
    let pad = outline_width.max(1);
    let min_x = points.iter().map(|p| p.0).min().unwrap_or(0) - pad;
    let min_y = points.iter().map(|p| p.1).min().unwrap_or(0) - pad;
    let max_x = points.iter().map(|p| p.0).max().unwrap_or(0) + pad;
    let max_y = points.iter().map(|p| p.1).max().unwrap_or(0) + pad;

    let mut border = Mask::new(img, (min_x, min_y), (max_x, max_y));
    let outline = outline.filter(|_| outline_width > 0);
    if outline.is_some() {
        stroke(&mut border, points, outline_width);
    }

    if let Some(fill) = fill {
        let mut body = Mask::new(img, (min_x, min_y), (max_x, max_y));
        scanline_fill(&mut body, points);
        let inside: Vec<(i64, i64)> = body.points().filter(|&(x, y)| !border.contains(x, y)).collect();
        for (x, y) in inside {
            paint(img, x, y, fill);
        }
    }

    if let Some(outline) = outline {
        let ring: Vec<(i64, i64)> = border.points().collect();
        for (x, y) in ring {
            paint(img, x, y, outline);
        }
    }
}
