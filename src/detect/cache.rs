use std::collections::HashMap;

use crate::{
    assets::raster::FrameImage,
    detect::{SlotDetector, slot::SlotSet},
    foundation::math::Fnv1a64,
};

/// Content identity of a frame: FNV-1a over its dimensions and RGBA8 pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FrameFingerprint(u64);

impl FrameFingerprint {
    pub fn of(frame: &FrameImage) -> Self {
        let mut h = Fnv1a64::new_default();
        h.write_u32(frame.width());
        h.write_u32(frame.height());
        h.write_bytes(frame.pixels().as_raw());
        Self(h.finish())
    }
}

/// Memoizes detection results by frame content.
#[derive(Debug, Default)]
pub struct SlotCache {
    detector: SlotDetector,
    entries: HashMap<FrameFingerprint, SlotSet>,
    detect_runs: u64,
}

impl SlotCache {
    pub fn new(detector: SlotDetector) -> Self {
        Self {
            detector,
            entries: HashMap::new(),
            detect_runs: 0,
        }
    }

    /// Cached slots for `frame`, running detection only on the first request.
    pub fn get_or_detect(&mut self, frame: &FrameImage) -> &SlotSet {
        let key = FrameFingerprint::of(frame);
        let detector = &self.detector;
        let runs = &mut self.detect_runs;
        self.entries.entry(key).or_insert_with(|| {
            *runs += 1;
            detector.detect(frame)
        })
    }

    pub fn get(&self, frame: &FrameImage) -> Option<&SlotSet> {
        self.entries.get(&FrameFingerprint::of(frame))
    }

    /// Store an externally supplied slot set for `frame`.
    pub fn insert(&mut self, frame: &FrameImage, slots: SlotSet) {
        self.entries.insert(FrameFingerprint::of(frame), slots);
    }

    /// How many times detection actually ran.
    pub fn detect_runs(&self) -> u64 {
        self.detect_runs
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/detect/cache.rs"]
mod tests;
