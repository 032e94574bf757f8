//! Placeholder slot detection.
//!
//! A frame is analyzed at a bounded working resolution. Transparent regions are labeled first;
//! when they produce no qualifying component, near-white regions are labeled instead. Qualifying
//! components become [`Slot`]s in reading order.

pub mod cache;
pub mod label;
pub mod predicate;
pub mod slot;

use std::{borrow::Cow, path::Path};

use image::{RgbaImage, imageops::FilterType};

use crate::{
    assets::raster::FrameImage,
    config::DetectConfig,
    foundation::{
        core::{NormRect, PixelRect},
        error::PhotoslotResult,
    },
    transform::{WorkingScale, working_scale},
};

use self::{
    label::{Component, label_components},
    predicate::{PlaceholderPredicate, has_alpha_variation},
    slot::{Slot, SlotSet, order_slots},
};

/// Detects placeholder slots with a fixed [`DetectConfig`].
#[derive(Clone, Debug, Default)]
pub struct SlotDetector {
    config: DetectConfig,
}

impl SlotDetector {
    /// Create a detector after validating `config`.
    pub fn new(config: DetectConfig) -> PhotoslotResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DetectConfig {
        &self.config
    }

    /// Detect slots in a decoded frame. Deterministic for a given pixel content.
    ///
    /// A frame without any placeholder yields an empty [`SlotSet`], not an error.
    #[tracing::instrument(skip_all, fields(width = frame.width(), height = frame.height()))]
    pub fn detect(&self, frame: &FrameImage) -> SlotSet {
        let scale = working_scale(
            frame.width(),
            frame.height(),
            self.config.max_working_dimension,
        );
        let working: Cow<'_, RgbaImage> = if scale.is_identity() {
            Cow::Borrowed(frame.pixels())
        } else {
            tracing::debug!(
                working_width = scale.width,
                working_height = scale.height,
                "downsampling frame for detection"
            );
            Cow::Owned(image::imageops::resize(
                frame.pixels(),
                scale.width,
                scale.height,
                FilterType::Triangle,
            ))
        };

        let transparent = PlaceholderPredicate::Transparent {
            below: self.config.alpha_threshold,
        };
        let white = PlaceholderPredicate::White {
            above: self.config.white_threshold,
        };

        let mut used_alpha_channel = false;
        let mut slots = Vec::new();
        if has_alpha_variation(working.as_raw()) {
            slots = self.run_pass(&working, transparent, scale, frame);
            used_alpha_channel = !slots.is_empty();
        }
        if slots.is_empty() {
            slots = self.run_pass(&working, white, scale, frame);
        }

        order_slots(&mut slots, self.config.row_tolerance);
        tracing::debug!(slots = slots.len(), used_alpha_channel, "detection finished");

        SlotSet {
            slots,
            used_alpha_channel,
            source_width: frame.width(),
            source_height: frame.height(),
        }
    }

    /// Decode a frame from bytes and detect its slots.
    pub fn detect_bytes(&self, bytes: &[u8]) -> PhotoslotResult<SlotSet> {
        Ok(self.detect(&FrameImage::from_bytes(bytes)?))
    }

    /// Read a frame file and detect its slots.
    pub fn detect_path(&self, path: impl AsRef<Path>) -> PhotoslotResult<SlotSet> {
        Ok(self.detect(&FrameImage::open(path)?))
    }

    fn run_pass(
        &self,
        working: &RgbaImage,
        predicate: PlaceholderPredicate,
        scale: WorkingScale,
        frame: &FrameImage,
    ) -> Vec<Slot> {
        let components = label_components(working, predicate);
        let slots: Vec<Slot> = components
            .iter()
            .filter(|c| self.qualifies(c, scale))
            .filter_map(|c| to_slot(c, scale, frame))
            .collect();
        tracing::debug!(
            pass = predicate.label(),
            components = components.len(),
            qualifying = slots.len(),
            "labeling pass"
        );
        slots
    }

    fn qualifies(&self, c: &Component, scale: WorkingScale) -> bool {
        let area = f64::from(scale.width) * f64::from(scale.height);
        let min_count = area * self.config.min_slot_area_fraction;
        c.count as f64 > min_count
            && c.width() > self.config.min_slot_dimension
            && c.height() > self.config.min_slot_dimension
    }
}

fn to_slot(c: &Component, scale: WorkingScale, frame: &FrameImage) -> Option<Slot> {
    let rect = PixelRect::new(
        scale.to_native(c.min_x),
        scale.to_native(c.min_y),
        scale.to_native(c.width()),
        scale.to_native(c.height()),
    )
    .clamp_to(frame.width(), frame.height())?;

    let (ww, wh) = (f64::from(scale.width), f64::from(scale.height));
    let norm = NormRect {
        nx: f64::from(c.min_x) / ww,
        ny: f64::from(c.min_y) / wh,
        nw: f64::from(c.width()) / ww,
        nh: f64::from(c.height()) / wh,
    };
    Some(Slot { rect, norm })
}

/// Detect slots with the default configuration.
pub fn detect(frame: &FrameImage) -> SlotSet {
    SlotDetector::default().detect(frame)
}

#[cfg(test)]
#[path = "../tests/unit/detect/detector.rs"]
mod tests;
