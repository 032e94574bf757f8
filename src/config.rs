//! Tunable thresholds for detection, compositing and preview rendering.
//!
//! Every struct deserializes with `#[serde(default)]`, so a JSON file only needs the keys it
//! overrides.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::foundation::error::{PhotoslotError, PhotoslotResult};

/// Slot detection options.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DetectConfig {
    /// Longest side of the raster actually analyzed; larger frames are downsampled.
    pub max_working_dimension: u32,
    /// A pixel with alpha strictly below this is a transparent placeholder candidate.
    pub alpha_threshold: u8,
    /// A pixel with R, G and B strictly above this is a white placeholder candidate.
    pub white_threshold: u8,
    /// Components must cover strictly more than this fraction of the working area.
    pub min_slot_area_fraction: f64,
    /// Component bounding boxes must be strictly wider and taller than this (working pixels).
    pub min_slot_dimension: u32,
    /// Slots whose normalized Y differs by at most this share a row.
    pub row_tolerance: f64,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            max_working_dimension: 1000,
            alpha_threshold: 50,
            white_threshold: 240,
            min_slot_area_fraction: 0.005,
            min_slot_dimension: 10,
            row_tolerance: 0.1,
        }
    }
}

impl DetectConfig {
    pub fn validate(&self) -> PhotoslotResult<()> {
        if self.max_working_dimension == 0 {
            return Err(PhotoslotError::validation(
                "max_working_dimension must be > 0",
            ));
        }
        if self.alpha_threshold == 0 {
            return Err(PhotoslotError::validation("alpha_threshold must be > 0"));
        }
        if !(0.0..1.0).contains(&self.min_slot_area_fraction) {
            return Err(PhotoslotError::validation(
                "min_slot_area_fraction must be in [0, 1)",
            ));
        }
        if !(0.0..=1.0).contains(&self.row_tolerance) {
            return Err(PhotoslotError::validation(
                "row_tolerance must be in [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Encoding used for the final composite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossy JPEG at [`ComposeConfig::quality`].
    #[default]
    Jpeg,
    /// Lossless PNG.
    Png,
}

/// Final compositor options.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComposeConfig {
    /// The first slot's center must have alpha strictly above this to trigger masking.
    pub mask_alpha_threshold: u8,
    /// Near-white cutoff used by the masking decision and the masking pass.
    pub white_threshold: u8,
    /// Opaque RGB fill under the shots.
    pub background: [u8; 3],
    pub format: OutputFormat,
    /// Lossy quality in `(0, 1]`.
    pub quality: f32,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            mask_alpha_threshold: 250,
            white_threshold: 240,
            background: [255, 255, 255],
            format: OutputFormat::Jpeg,
            quality: 0.95,
        }
    }
}

impl ComposeConfig {
    pub fn validate(&self) -> PhotoslotResult<()> {
        if !(self.quality > 0.0 && self.quality <= 1.0) {
            return Err(PhotoslotError::validation("quality must be in (0, 1]"));
        }
        Ok(())
    }

    /// JPEG quality on the encoder's `1..=100` scale.
    pub fn jpeg_quality(&self) -> u8 {
        (self.quality * 100.0).round().clamp(1.0, 100.0) as u8
    }
}

/// Color/tone treatment applied to photo content in the live preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneFilter {
    #[default]
    None,
    Mono,
    Sepia,
    Warm,
    Cool,
}

/// Translucent color laid over photo content in the live preview.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Overlay {
    /// Straight RGBA8 tint.
    pub rgba: [u8; 4],
    /// Extra opacity multiplier in `[0, 1]`.
    pub opacity: f32,
}

/// Live preview options.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PreviewOptions {
    pub width: u32,
    pub height: u32,
    /// Opaque RGB fill behind everything.
    pub background: [u8; 3],
    /// Flip the live raster horizontally before placing it.
    pub mirror_live: bool,
    pub filter: ToneFilter,
    pub overlay: Option<Overlay>,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            width: 480,
            height: 720,
            background: [240, 240, 240],
            mirror_live: true,
            filter: ToneFilter::None,
            overlay: None,
        }
    }
}

impl PreviewOptions {
    pub fn validate(&self) -> PhotoslotResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PhotoslotError::validation(
                "preview width and height must be > 0",
            ));
        }
        if let Some(overlay) = self.overlay
            && !(0.0..=1.0).contains(&overlay.opacity)
        {
            return Err(PhotoslotError::validation(
                "overlay opacity must be in [0, 1]",
            ));
        }
        Ok(())
    }
}

/// All options, as loaded from a JSON file.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PhotoslotConfig {
    pub detect: DetectConfig,
    pub compose: ComposeConfig,
    pub preview: PreviewOptions,
}

impl PhotoslotConfig {
    /// Load and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> PhotoslotResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse config JSON '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> PhotoslotResult<()> {
        self.detect.validate()?;
        self.compose.validate()?;
        self.preview.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
