//! Affine transform helpers.

use crate::foundation::core::{Affine, Point, Rect};

/// Scale-to-cover placement of a source raster inside a target rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverPlacement {
    /// Uniform scale applied to the source.
    pub scale: f64,
    /// Where the whole scaled source lands; always contains the target.
    pub dest: Rect,
    /// Maps source pixel space into destination space.
    pub to_dest: Affine,
    /// Inverse of `to_dest`.
    pub to_source: Affine,
}

impl CoverPlacement {
    /// Source-space sample position for the center of destination pixel `(px, py)`.
    pub fn source_point(&self, px: u32, py: u32) -> Point {
        let center = Point::new(f64::from(px) + 0.5, f64::from(py) + 0.5);
        let p = self.to_source * center;
        Point::new(p.x - 0.5, p.y - 0.5)
    }
}

/// Smallest uniform scale that covers `target`, centered on it.
pub fn cover_placement(target: Rect, src_width: u32, src_height: u32) -> CoverPlacement {
    let (sw, sh) = (f64::from(src_width.max(1)), f64::from(src_height.max(1)));
    let scale = (target.width() / sw).max(target.height() / sh);
    let (dw, dh) = (sw * scale, sh * scale);
    let dx = target.x0 + (target.width() - dw) / 2.0;
    let dy = target.y0 + (target.height() - dh) / 2.0;

    let to_dest = Affine::translate((dx, dy)) * Affine::scale(scale);
    CoverPlacement {
        scale,
        dest: Rect::new(dx, dy, dx + dw, dy + dh),
        to_dest,
        to_source: to_dest.inverse(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
