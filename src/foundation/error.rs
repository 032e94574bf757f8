/// Convenience result type used across photoslot.
pub type PhotoslotResult<T> = Result<T, PhotoslotError>;

/// Top-level error taxonomy used by detection and compositing APIs.
#[derive(thiserror::Error, Debug)]
pub enum PhotoslotError {
    /// A frame or shot raster could not be read or decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Composition was requested with no slots to place shots into.
    #[error("empty slots error: frame has no placeholder slots")]
    EmptySlots,

    /// Invalid configuration values or session transitions.
    #[error("validation error: {0}")]
    Validation(String),

    /// The composited raster could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PhotoslotError {
    /// Build a [`PhotoslotError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`PhotoslotError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PhotoslotError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
