//! Final composite: background, shots scaled-to-cover into slots, frame on top.

pub mod blend;
pub mod draw;
pub mod mask;

use std::{io::Cursor, path::Path};

use anyhow::Context as _;
use image::{
    ImageFormat, Rgba, RgbImage, RgbaImage, buffer::ConvertBuffer, codecs::jpeg::JpegEncoder,
};

use crate::{
    assets::{
        decode::premultiply_rgba8_in_place,
        raster::{CapturedShot, FrameImage},
    },
    config::{ComposeConfig, OutputFormat},
    detect::slot::SlotSet,
    foundation::{
        core::PixelRect,
        error::{PhotoslotError, PhotoslotResult},
    },
};

use self::{
    blend::over_in_place,
    draw::draw_cover,
    mask::{mask_white_in_slots, needs_masking},
};

/// A finished composite: opaque pixels plus their encoded form.
#[derive(Clone, Debug)]
pub struct CompositeResult {
    /// Opaque RGBA8 at the frame's native size.
    pub image: RgbaImage,
    /// `image` encoded in `format`.
    pub encoded: Vec<u8>,
    pub format: OutputFormat,
}

impl CompositeResult {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Write the encoded bytes to `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> PhotoslotResult<()> {
        let path = path.as_ref();
        std::fs::write(path, &self.encoded)
            .with_context(|| format!("write composite '{}'", path.display()))?;
        Ok(())
    }
}

/// Layers captured shots under a frame's placeholder slots.
#[derive(Clone, Debug, Default)]
pub struct Compositor {
    config: ComposeConfig,
}

impl Compositor {
    pub fn new(config: ComposeConfig) -> PhotoslotResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ComposeConfig {
        &self.config
    }

    /// Composite `shots` into `slots` of `frame`.
    ///
    /// Slot `i` receives `shots[i % shots.len()]`. An empty shot list leaves every slot showing
    /// the background. Fails with [`PhotoslotError::EmptySlots`] when `slots` is empty.
    #[tracing::instrument(
        skip_all,
        fields(width = frame.width(), height = frame.height(), slots = slots.len(), shots = shots.len())
    )]
    pub fn compose(
        &self,
        frame: &FrameImage,
        shots: &[CapturedShot],
        slots: &SlotSet,
    ) -> PhotoslotResult<CompositeResult> {
        if slots.is_empty() {
            return Err(PhotoslotError::EmptySlots);
        }
        let (w, h) = (frame.width(), frame.height());
        let rects = slots.rects_for(w, h);

        let mut overlay = frame.working_copy();
        let masking = rects.first().copied().flatten().is_some_and(|first| {
            needs_masking(
                frame,
                first,
                self.config.mask_alpha_threshold,
                self.config.white_threshold,
            )
        });
        tracing::debug!(masking, "placeholder encoding decided");
        if masking {
            let present: Vec<PixelRect> = rects.iter().flatten().copied().collect();
            mask_white_in_slots(&mut overlay, &present, self.config.white_threshold);
        }
        premultiply_rgba8_in_place(&mut overlay);

        let [r, g, b] = self.config.background;
        let mut canvas = RgbaImage::from_pixel(w, h, Rgba([r, g, b, 255]));
        if shots.is_empty() {
            tracing::debug!("no shots supplied; slots keep the background");
        } else {
            for (i, rect) in rects.iter().enumerate() {
                if let Some(rect) = rect {
                    draw_cover(&mut canvas, shots[i % shots.len()].pixels(), *rect);
                }
            }
        }
        over_in_place(&mut canvas, &overlay, 1.0)?;

        let encoded = encode(&canvas, self.config.format, self.config.jpeg_quality())?;
        Ok(CompositeResult {
            image: canvas,
            encoded,
            format: self.config.format,
        })
    }
}

/// Encode an opaque RGBA8 image.
pub fn encode(image: &RgbaImage, format: OutputFormat, jpeg_quality: u8) -> PhotoslotResult<Vec<u8>> {
    let mut buf = Vec::new();
    match format {
        OutputFormat::Jpeg => {
            let rgb: RgbImage = image.convert();
            JpegEncoder::new_with_quality(&mut buf, jpeg_quality)
                .encode_image(&rgb)
                .map_err(|e| PhotoslotError::encode(format!("jpeg: {e}")))?;
        }
        OutputFormat::Png => {
            image
                .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
                .map_err(|e| PhotoslotError::encode(format!("png: {e}")))?;
        }
    }
    Ok(buf)
}

/// Detect slots with default settings, then composite with default settings.
pub fn compose(frame: &FrameImage, shots: &[CapturedShot]) -> PhotoslotResult<CompositeResult> {
    let slots = crate::detect::detect(frame);
    Compositor::default().compose(frame, shots, &slots)
}

#[cfg(test)]
#[path = "../tests/unit/composite/compositor.rs"]
mod tests;
