//! Pixel resampling between texture resolutions.
//!
//! Source color and UV mask are frequently authored at different sizes; both
//! are brought to the requested bleed resolution here before classification.
//! Each target pixel center maps to a normalized coordinate and is sampled
//! bilinearly from the source with borders clamped.
//!
//! With the `parallel` feature, rows are produced with Rayon.

pub mod bilinear;

use crate::error::{BleedError, Result};
use crate::image::{ImageRgba, Rgba};
use log::debug;
use std::borrow::Cow;

pub use bilinear::{pixel_center, pixel_centers, sample_bilinear};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Resample `source` to `target_w × target_h`.
///
/// Returns an unchanged copy when the dimensions already match. Fails with
/// `InvalidDimensions` for empty source or target and with
/// `DimensionMismatch` when the source buffer length disagrees with its
/// declared size.
pub fn resample(source: &ImageRgba, target_w: usize, target_h: usize) -> Result<ImageRgba> {
    resample_to_match(source, target_w, target_h).map(Cow::into_owned)
}

/// Like [`resample`] but borrows `source` when no work is needed.
pub fn resample_to_match(
    source: &ImageRgba,
    target_w: usize,
    target_h: usize,
) -> Result<Cow<'_, ImageRgba>> {
    BleedError::check_dimensions(target_w, target_h)?;
    source.validate()?;
    if source.w == target_w && source.h == target_h {
        return Ok(Cow::Borrowed(source));
    }
    debug!(
        "resample {}x{} -> {}x{}",
        source.w, source.h, target_w, target_h
    );
    let mut out = ImageRgba::try_filled(target_w, target_h, Rgba::TRANSPARENT)?;
    fill_rows(source, &mut out.data, target_w, target_h);
    Ok(Cow::Owned(out))
}

fn resample_row(source: &ImageRgba, row: &mut [Rgba], y: usize, target_w: usize, target_h: usize) {
    let v = pixel_center(y, target_h);
    for (x, px) in row.iter_mut().enumerate() {
        *px = sample_bilinear(source, pixel_center(x, target_w), v);
    }
}

#[cfg(feature = "parallel")]
fn fill_rows(source: &ImageRgba, data: &mut [Rgba], target_w: usize, target_h: usize) {
    data.par_chunks_mut(target_w)
        .enumerate()
        .for_each(|(y, row)| resample_row(source, row, y, target_w, target_h));
}

#[cfg(not(feature = "parallel"))]
fn fill_rows(source: &ImageRgba, data: &mut [Rgba], target_w: usize, target_h: usize) {
    for (y, row) in data.chunks_mut(target_w).enumerate() {
        resample_row(source, row, y, target_w, target_h);
    }
}
