//! Error types for edge bleeding.
//!
//! Every failure of the core is detected synchronously and reported through
//! [`BleedError`]; no partially bled buffer is ever handed back.

use thiserror::Error;

/// Result type alias using [`BleedError`].
pub type Result<T> = std::result::Result<T, BleedError>;

/// Errors that can occur while resampling, classifying or bleeding.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BleedError {
    /// Width or height is zero, or `width * height` does not fit in `usize`.
    #[error("invalid dimensions {width}x{height}: pixel count must be positive and fit in usize")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// A pixel buffer does not hold `width * height` samples.
    #[error("buffer holds {len} pixels, expected {width}x{height}")]
    DimensionMismatch {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
        /// Actual buffer length.
        len: usize,
    },

    /// Color, mask and requested shape disagree.
    #[error("shape mismatch: color has {color} pixels, mask has {mask}, expected {expected}")]
    ShapeMismatch {
        /// Color buffer length.
        color: usize,
        /// Mask (or state) buffer length.
        mask: usize,
        /// `width * height`.
        expected: usize,
    },

    /// The mask contains no opaque pixel, so there is nothing to bleed from.
    #[error("mask has no opaque pixel to bleed from")]
    NoSeedRegion,

    /// Propagation did not converge within the round budget.
    #[error("propagation exceeded {max_rounds} rounds")]
    RoundLimitExceeded {
        /// The round budget that was exhausted.
        max_rounds: usize,
    },

    /// Pixels remained unresolved after the frontier emptied.
    #[error("{count} pixels left unresolved after propagation")]
    Unresolved {
        /// Number of pixels never reached by the wavefront.
        count: usize,
    },

    /// A UV triangle references a vertex that does not exist.
    #[error("triangle {triangle} references invalid uv index {vertex}")]
    InvalidTriangle {
        /// The triangle index.
        triangle: usize,
        /// The invalid vertex index.
        vertex: u32,
    },
}

impl BleedError {
    /// Validate `width × height` and return its pixel count.
    pub fn check_dimensions(width: usize, height: usize) -> Result<usize> {
        match width.checked_mul(height) {
            Some(count) if count > 0 => Ok(count),
            _ => Err(BleedError::InvalidDimensions { width, height }),
        }
    }
}
