use std::{path::Path, sync::Arc};

use image::RgbaImage;

use crate::{
    assets::decode::{decode_rgba, read_rgba},
    foundation::error::{PhotoslotError, PhotoslotResult},
};

fn non_empty(image: RgbaImage) -> PhotoslotResult<Arc<RgbaImage>> {
    if image.width() == 0 || image.height() == 0 {
        return Err(PhotoslotError::decode("raster has zero width or height"));
    }
    Ok(Arc::new(image))
}

/// Decorative frame raster, loaded once per session and never mutated.
///
/// Cloning is cheap; pixel edits go through [`FrameImage::working_copy`].
#[derive(Clone, Debug)]
pub struct FrameImage {
    pixels: Arc<RgbaImage>,
}

impl FrameImage {
    /// Wrap an already decoded RGBA8 raster.
    pub fn from_rgba(image: RgbaImage) -> PhotoslotResult<Self> {
        Ok(Self {
            pixels: non_empty(image)?,
        })
    }

    /// Decode a frame from encoded bytes.
    pub fn from_bytes(bytes: &[u8]) -> PhotoslotResult<Self> {
        Self::from_rgba(decode_rgba(bytes)?)
    }

    /// Read and decode a frame file.
    pub fn open(path: impl AsRef<Path>) -> PhotoslotResult<Self> {
        Self::from_rgba(read_rgba(path.as_ref())?)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Borrow the straight-alpha RGBA8 pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Straight RGBA8 value at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixels.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Owned copy for in-place edits such as masking.
    pub fn working_copy(&self) -> RgbaImage {
        self.pixels.as_ref().clone()
    }
}

/// A captured photograph, regardless of which device produced it.
#[derive(Clone, Debug)]
pub struct CapturedShot {
    pixels: Arc<RgbaImage>,
}

impl CapturedShot {
    /// Wrap an already decoded RGBA8 raster.
    pub fn from_rgba(image: RgbaImage) -> PhotoslotResult<Self> {
        Ok(Self {
            pixels: non_empty(image)?,
        })
    }

    /// Decode a shot from encoded bytes.
    pub fn from_bytes(bytes: &[u8]) -> PhotoslotResult<Self> {
        Self::from_rgba(decode_rgba(bytes)?)
    }

    /// Read and decode a shot file.
    pub fn open(path: impl AsRef<Path>) -> PhotoslotResult<Self> {
        Self::from_rgba(read_rgba(path.as_ref())?)
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Horizontally flipped copy, as seen in a selfie mirror.
    pub fn mirrored(&self) -> Self {
        Self {
            pixels: Arc::new(image::imageops::flip_horizontal(self.pixels.as_ref())),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/raster.rs"]
mod tests;
