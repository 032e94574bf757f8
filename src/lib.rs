//! Photobooth frame slot detection and shot compositing.
//!
//! A *frame* is a decorative overlay image with placeholder regions (transparent holes, or
//! opaque near-white boxes). [`SlotDetector`] finds those placeholders as [`Slot`]s in reading
//! order, and [`Compositor`] layers captured shots under the frame so each shot shows through
//! its slot, scaled to cover and clipped to the slot rectangle.
//!
//! ```no_run
//! use photoslot::{CapturedShot, Compositor, FrameImage, SlotDetector};
//!
//! # fn main() -> photoslot::PhotoslotResult<()> {
//! let frame = FrameImage::open("frame.png")?;
//! let slots = SlotDetector::default().detect(&frame);
//! let shots = vec![CapturedShot::open("shot1.jpg")?, CapturedShot::open("shot2.jpg")?];
//! let out = Compositor::default().compose(&frame, &shots, &slots)?;
//! out.write_to("strip.jpg")?;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

pub mod assets;
pub mod composite;
pub mod config;
pub mod detect;
pub mod foundation;
pub mod logger;
pub mod preview;
pub mod session;
pub mod transform;

pub use assets::raster::{CapturedShot, FrameImage};
pub use composite::{CompositeResult, Compositor, compose};
pub use config::{
    ComposeConfig, DetectConfig, OutputFormat, Overlay, PhotoslotConfig, PreviewOptions,
    ToneFilter,
};
pub use detect::{
    SlotDetector,
    cache::{FrameFingerprint, SlotCache},
    detect,
    slot::{Slot, SlotSet},
};
pub use foundation::core::{NormRect, PixelRect};
pub use foundation::error::{PhotoslotError, PhotoslotResult};
pub use preview::render_preview;
pub use session::{CaptureSession, SessionPhase};
