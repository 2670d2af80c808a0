//! Texture edge bleeding: the end-to-end operation.
//!
//! Overview
//! - Resamples source color and UV mask to the requested resolution when
//!   their native sizes differ (bilinear, pixel centers, clamped borders).
//! - Classifies mask pixels as opaque / boundary / loose.
//! - Propagates shell colors outward round by round until every pixel is
//!   resolved.
//!
//! [`bleed`] is the one-call entry point. [`EdgeBleeder`] carries
//! [`BleedParams`] (mask threshold, round budget, debug views) and can return a
//! [`BleedReport`](crate::diagnostics::BleedReport) with per-stage timings.

mod params;
mod pipeline;

use crate::error::{BleedError, Result};
use crate::image::{ImageRgba, Rgba};

pub use params::{BleedParams, DebugView};
pub use pipeline::EdgeBleeder;

/// Bleed `source` into the background of `mask` at `width × height` with
/// default parameters.
pub fn bleed(
    source: &ImageRgba,
    mask: &ImageRgba,
    width: usize,
    height: usize,
) -> Result<ImageRgba> {
    EdgeBleeder::default().process(source, mask, width, height)
}

/// Bleed flat, same-resolution pixel buffers laid out row-major.
///
/// Both buffers must hold exactly `width * height` pixels; any disagreement is
/// a `ShapeMismatch` reported before pixel work starts.
pub fn bleed_buffers(
    source: &[Rgba],
    mask: &[Rgba],
    width: usize,
    height: usize,
) -> Result<Vec<Rgba>> {
    let expected = BleedError::check_dimensions(width, height)?;
    if source.len() != mask.len() || source.len() != expected {
        return Err(BleedError::ShapeMismatch {
            color: source.len(),
            mask: mask.len(),
            expected,
        });
    }
    let source = ImageRgba::from_pixels(width, height, source.to_vec())?;
    let mask = ImageRgba::from_pixels(width, height, mask.to_vec())?;
    bleed(&source, &mask, width, height).map(|img| img.data)
}
