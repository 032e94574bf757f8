//! Capture session state.
//!
//! A session is an immutable value: [`CaptureSession::record`] and [`CaptureSession::reset`]
//! return the next state and leave the receiver untouched, so a caller holding an older state
//! can never observe a partially updated shot list.

use std::sync::Arc;

use image::RgbaImage;

use crate::{
    assets::raster::{CapturedShot, FrameImage},
    composite::{CompositeResult, Compositor},
    config::PreviewOptions,
    detect::{cache::SlotCache, slot::SlotSet},
    foundation::error::{PhotoslotError, PhotoslotResult},
    preview::render_preview,
};

/// Where a session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for shot number `next` (1-based).
    Capturing { next: usize },
    /// One shot per slot has been recorded.
    Complete,
}

#[derive(Clone, Debug)]
pub struct CaptureSession {
    frame: FrameImage,
    slots: Arc<SlotSet>,
    shots: Vec<CapturedShot>,
}

impl CaptureSession {
    /// Begin capturing into `frame`. Fails with [`PhotoslotError::EmptySlots`] when `slots` is
    /// empty, since there would be nothing to fill.
    pub fn start(frame: FrameImage, slots: SlotSet) -> PhotoslotResult<Self> {
        if slots.is_empty() {
            return Err(PhotoslotError::EmptySlots);
        }
        tracing::debug!(slots = slots.len(), "capture session started");
        Ok(Self {
            frame,
            slots: Arc::new(slots),
            shots: Vec::new(),
        })
    }

    /// Start with slots from `cache`, detecting only if this frame has not been seen.
    pub fn start_cached(cache: &mut SlotCache, frame: FrameImage) -> PhotoslotResult<Self> {
        let slots = cache.get_or_detect(&frame).clone();
        Self::start(frame, slots)
    }

    pub fn frame(&self) -> &FrameImage {
        &self.frame
    }

    pub fn slots(&self) -> &SlotSet {
        &self.slots
    }

    /// Recorded shots in capture order.
    pub fn shots(&self) -> &[CapturedShot] {
        &self.shots
    }

    pub fn required_shots(&self) -> usize {
        self.slots.len()
    }

    pub fn remaining(&self) -> usize {
        self.required_shots() - self.shots.len()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_complete() {
            SessionPhase::Complete
        } else {
            SessionPhase::Capturing {
                next: self.shots.len() + 1,
            }
        }
    }

    /// The state after committing `shot`.
    pub fn record(&self, shot: CapturedShot) -> PhotoslotResult<Self> {
        if self.is_complete() {
            return Err(PhotoslotError::validation(format!(
                "session already holds {} of {} shots",
                self.shots.len(),
                self.required_shots()
            )));
        }
        let mut shots = self.shots.clone();
        shots.push(shot);
        tracing::debug!(
            recorded = shots.len(),
            required = self.required_shots(),
            "shot recorded"
        );
        Ok(Self {
            frame: self.frame.clone(),
            slots: Arc::clone(&self.slots),
            shots,
        })
    }

    /// The state with every shot discarded; frame and slots are kept.
    pub fn reset(&self) -> Self {
        Self {
            frame: self.frame.clone(),
            slots: Arc::clone(&self.slots),
            shots: Vec::new(),
        }
    }

    pub fn preview(
        &self,
        live: Option<&CapturedShot>,
        opts: &PreviewOptions,
    ) -> PhotoslotResult<RgbaImage> {
        render_preview(&self.frame, &self.slots, &self.shots, live, opts)
    }

    /// Composite the recorded shots. Only a complete session can finish.
    pub fn finish(&self, compositor: &Compositor) -> PhotoslotResult<CompositeResult> {
        if !self.is_complete() {
            return Err(PhotoslotError::validation(format!(
                "session needs {} more shot(s)",
                self.remaining()
            )));
        }
        compositor.compose(&self.frame, &self.shots, &self.slots)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
