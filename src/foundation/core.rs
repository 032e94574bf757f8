use crate::transform::non_linear::clamp01;

pub use kurbo::{Affine, Point, Rect};

/// Axis-aligned rectangle in native frame pixels. `x + w` and `y + h` are exclusive edges.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(self) -> u32 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(self) -> u32 {
        self.y.saturating_add(self.h)
    }

    pub fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Integer center, rounded toward the top-left.
    pub fn center(self) -> (u32, u32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn fits_within(self, width: u32, height: u32) -> bool {
        !self.is_empty() && self.right() <= width && self.bottom() <= height
    }

    /// Intersect with `[0, width) x [0, height)`; `None` when nothing is left.
    pub fn clamp_to(self, width: u32, height: u32) -> Option<Self> {
        let right = self.right().min(width);
        let bottom = self.bottom().min(height);
        if self.x >= right || self.y >= bottom {
            return None;
        }
        Some(Self {
            x: self.x,
            y: self.y,
            w: right - self.x,
            h: bottom - self.y,
        })
    }

    pub fn to_kurbo(self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.right()),
            f64::from(self.bottom()),
        )
    }
}

/// Rectangle in `[0, 1]` units relative to the frame width and height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NormRect {
    pub nx: f64,
    pub ny: f64,
    pub nw: f64,
    pub nh: f64,
}

impl NormRect {
    pub fn from_pixels(rect: PixelRect, width: u32, height: u32) -> Self {
        let (fw, fh) = (f64::from(width.max(1)), f64::from(height.max(1)));
        Self {
            nx: f64::from(rect.x) / fw,
            ny: f64::from(rect.y) / fh,
            nw: f64::from(rect.w) / fw,
            nh: f64::from(rect.h) / fh,
        }
    }

    /// Project onto a `width x height` raster, flooring every edge and clamping to bounds.
    pub fn to_pixels(self, width: u32, height: u32) -> Option<PixelRect> {
        let (fw, fh) = (f64::from(width), f64::from(height));
        let x = (clamp01(self.nx) * fw).floor() as u32;
        let y = (clamp01(self.ny) * fh).floor() as u32;
        let w = (self.nw.max(0.0) * fw).floor() as u32;
        let h = (self.nh.max(0.0) * fh).floor() as u32;
        PixelRect::new(x, y, w, h).clamp_to(width, height)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    pub fn from_straight(rgba: [u8; 4]) -> Self {
        Self::from_straight_rgba(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
