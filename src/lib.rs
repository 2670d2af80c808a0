#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod bleed;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod mask;
pub mod task;

// Stage modules, public so tools can run or inspect a single stage.
pub mod classify;
pub mod config;
pub mod propagate;
pub mod resample;

// --- High-level re-exports -------------------------------------------------

// Main entry points.
pub use crate::bleed::{bleed, bleed_buffers, BleedParams, DebugView, EdgeBleeder};
pub use crate::error::{BleedError, Result};
pub use crate::image::{ImageRgba, Rgba};

// Diagnostics returned by the bleeder.
pub use crate::diagnostics::{BleedReport, BleedTrace};

// Stage entry points.
pub use crate::classify::{classify, Classification, PixelState};
pub use crate::mask::ShellMaskProvider;
pub use crate::propagate::propagate;
pub use crate::resample::resample;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use edge_bleed::prelude::*;
///
/// let source = ImageRgba::filled(3, 1, Rgba::RED);
/// let mask = ImageRgba::from_pixels(3, 1, vec![Rgba::WHITE, Rgba::TRANSPARENT, Rgba::TRANSPARENT])
///     .unwrap();
/// let out = bleed(&source, &mask, 3, 1).unwrap();
/// assert!(out.data.iter().all(|&c| c == Rgba::RED));
/// ```
pub mod prelude {
    pub use crate::image::{ImageRgba, Rgba};
    pub use crate::{bleed, BleedError, BleedParams, EdgeBleeder};
}
