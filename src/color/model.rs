//! The RGBA color value and its derived views.
//!
//! All conversions are pure functions of the channels. HSV saturation and
//! value are percentages in `[0, 100]`; hue is degrees in `[0, 360)`.

use std::fmt;

/// D65 reference white used for XYZ -> LAB normalisation.
const D65_WHITE: (f64, f64, f64) = (95.047, 100.000, 108.883);

/// CIE threshold for the cube-root branch of the LAB transfer function.
const LAB_EPSILON: f64 = 0.008856;

/// An sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Hue/saturation/value triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// CIE XYZ tristimulus values scaled to `Y = 100` for white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CIE L*a*b*.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Polar form of LAB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Build an opaque color from HSV with `h` in degrees and `s`/`v` in
    /// percent. Channels are rounded to the nearest integer.
    #[must_use]
    pub fn from_hsv(h: f64, s: f64, v: f64, a: u8) -> Self {
        let s = (s / 100.0).clamp(0.0, 1.0);
        let v = (v / 100.0).clamp(0.0, 1.0);
        let h = h.rem_euclid(360.0) / 60.0;

        let chroma = v * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = v - chroma;
        let channel = |c: f64| ((c + m) * 255.0).round().clamp(0.0, 255.0) as u8;

        Self::new(channel(r), channel(g), channel(b), a)
    }

    /// Same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn rgb_tuple(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn rgba_tuple(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    pub fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Lowercase `#rrggbbaa`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    pub fn hsv(&self) -> Hsv {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let s = if max == 0.0 { 0.0 } else { delta / max };

        Hsv {
            h: normalize_degrees(h),
            s: s * 100.0,
            v: max * 100.0,
        }
    }

    pub fn xyz(&self) -> Xyz {
        let r = linearize(self.r);
        let g = linearize(self.g);
        let b = linearize(self.b);

        Xyz {
            x: (r * 0.4124 + g * 0.3576 + b * 0.1805) * 100.0,
            y: (r * 0.2126 + g * 0.7152 + b * 0.0722) * 100.0,
            z: (r * 0.0193 + g * 0.1192 + b * 0.9505) * 100.0,
        }
    }

    pub fn lab(&self) -> Lab {
        let xyz = self.xyz();
        let fx = lab_transfer(xyz.x / D65_WHITE.0);
        let fy = lab_transfer(xyz.y / D65_WHITE.1);
        let fz = lab_transfer(xyz.z / D65_WHITE.2);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    pub fn lch(&self) -> Lch {
        let lab = self.lab();
        Lch {
            l: lab.l,
            c: lab.a.hypot(lab.b),
            h: normalize_degrees(lab.b.atan2(lab.a).to_degrees()),
        }
    }

    /// Straight-alpha source-over composite of `self` onto `dst`.
    #[must_use]
    pub fn over(self, dst: Color) -> Color {
        match self.a {
            255 => return self,
            0 => return dst,
            _ => {}
        }

        let sa = f64::from(self.a) / 255.0;
        let da = f64::from(dst.a) / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return Color::new(0, 0, 0, 0);
        }
        let mix = |s: u8, d: u8| {
            let c = (f64::from(s) * sa + f64::from(d) * da * (1.0 - sa)) / out_a;
            c.round().clamp(0.0, 255.0) as u8
        };

        Color::new(
            mix(self.r, dst.r),
            mix(self.g, dst.g),
            mix(self.b, dst.b),
            (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(c: Color) -> Self {
        image::Rgba(c.to_array())
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(p: image::Rgba<u8>) -> Self {
        Self::from(p.0)
    }
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn lab_transfer(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

fn normalize_degrees(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d >= 360.0 {
        0.0
    } else {
        d
    }
}
