/// Per-pixel test deciding whether a pixel belongs to a placeholder region.
///
/// Detection tries [`PlaceholderPredicate::Transparent`] first and falls back to
/// [`PlaceholderPredicate::White`]; both share one labeling routine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderPredicate {
    /// Alpha strictly below `below`.
    Transparent { below: u8 },
    /// R, G and B all strictly above `above`. Alpha is ignored.
    White { above: u8 },
}

impl PlaceholderPredicate {
    /// Test one straight RGBA8 pixel.
    #[inline]
    pub fn matches(self, px: &[u8]) -> bool {
        match self {
            Self::Transparent { below } => px[3] < below,
            Self::White { above } => px[0] > above && px[1] > above && px[2] > above,
        }
    }

    pub fn uses_alpha(self) -> bool {
        matches!(self, Self::Transparent { .. })
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Transparent { .. } => "alpha",
            Self::White { .. } => "white",
        }
    }
}

/// Whether any pixel in a straight RGBA8 buffer is not fully opaque.
pub fn has_alpha_variation(rgba: &[u8]) -> bool {
    rgba.chunks_exact(4).any(|px| px[3] < 255)
}

#[cfg(test)]
#[path = "../../tests/unit/detect/predicate.rs"]
mod tests;
