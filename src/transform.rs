//! Shared scaling helpers used by detection, compositing and preview rendering.

pub mod affine;
pub mod linear;
pub mod non_linear;

pub use affine::{CoverPlacement, cover_placement};
pub use linear::{WorkingScale, lerp, working_scale};
pub use non_linear::clamp01;
