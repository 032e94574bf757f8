//! Linear transform helpers.

#[inline]
/// Linearly interpolate between two channel values.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Uniform downscale applied before pixel analysis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkingScale {
    /// Factor from native to working pixels (`<= 1`).
    pub scale: f64,
    /// Working raster width.
    pub width: u32,
    /// Working raster height.
    pub height: u32,
}

impl WorkingScale {
    pub fn is_identity(&self) -> bool {
        self.scale == 1.0
    }

    /// Map a working-resolution length back to native pixels (floor).
    pub fn to_native(&self, v: u32) -> u32 {
        (f64::from(v) / self.scale).floor() as u32
    }
}

/// Aspect-preserving scale that keeps both dimensions within `max_dim`.
///
/// Rasters already within bounds are left at scale 1.
pub fn working_scale(width: u32, height: u32, max_dim: u32) -> WorkingScale {
    if width <= max_dim && height <= max_dim {
        return WorkingScale {
            scale: 1.0,
            width,
            height,
        };
    }
    let max_dim = f64::from(max_dim);
    let scale = (max_dim / f64::from(width)).min(max_dim / f64::from(height));
    WorkingScale {
        scale,
        width: ((f64::from(width) * scale).floor() as u32).max(1),
        height: ((f64::from(height) * scale).floor() as u32).max(1),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/linear.rs"]
mod tests;
