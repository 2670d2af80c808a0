//! Mask classification into opaque, boundary and loose pixels.
//!
//! A pixel is `Opaque` when its mask alpha reaches the threshold (0.5 by
//! default). Background pixels touching an opaque pixel through 8-adjacency are
//! `Boundary` and form the first wavefront; every other background pixel is
//! `Loose`. Classification is one pass over the mask with no iteration.
//!
//! The debug view colors the three classes with fixed diagnostic colors so the
//! shell border can be inspected without running propagation.

pub mod neighbors;

use crate::error::{BleedError, Result};
use crate::image::{ImageRgba, Rgba};
use log::debug;
use serde::Serialize;

pub use neighbors::{neighbors, NEIGHBOR_OFFSETS};

/// Mask alpha at or above which a pixel is inside a UV shell.
pub const MASK_ALPHA_THRESHOLD: f32 = 0.5;

/// Per-pixel resolution state. Transitions only `Loose → Boundary → Opaque`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PixelState {
    /// Has a definitive color (source or already bled).
    Opaque,
    /// Unresolved, adjacent to an opaque pixel; eligible this round.
    Boundary,
    /// Unresolved and not yet adjacent to any opaque pixel.
    Loose,
}

impl PixelState {
    /// Diagnostic color used by the classification debug view.
    pub fn debug_color(self) -> Rgba {
        match self {
            PixelState::Opaque => Rgba::WHITE,
            PixelState::Boundary => Rgba::RED,
            PixelState::Loose => Rgba::BLUE,
        }
    }
}

/// Number of pixels in each state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateCounts {
    pub opaque: usize,
    pub boundary: usize,
    pub loose: usize,
}

impl StateCounts {
    pub fn from_states(states: &[PixelState]) -> Self {
        let mut counts = Self::default();
        for s in states {
            match s {
                PixelState::Opaque => counts.opaque += 1,
                PixelState::Boundary => counts.boundary += 1,
                PixelState::Loose => counts.loose += 1,
            }
        }
        counts
    }
}

/// Output of [`classify`]: one state per mask pixel plus the initial frontier.
#[derive(Clone, Debug)]
pub struct Classification {
    pub w: usize,
    pub h: usize,
    pub states: Vec<PixelState>,
    /// Indices of `Boundary` pixels in ascending order.
    pub frontier: Vec<usize>,
    pub counts: StateCounts,
}

impl Classification {
    /// Seed the output color buffer: opaque pixels copy `source` verbatim,
    /// everything else stays transparent until propagation resolves it.
    pub fn seed_colors(&self, source: &ImageRgba) -> Result<ImageRgba> {
        source.validate()?;
        if source.pixel_count() != self.states.len() {
            return Err(BleedError::ShapeMismatch {
                color: source.pixel_count(),
                mask: self.states.len(),
                expected: self.states.len(),
            });
        }
        let data = self
            .states
            .iter()
            .zip(&source.data)
            .map(|(state, &color)| match state {
                PixelState::Opaque => color,
                _ => Rgba::TRANSPARENT,
            })
            .collect();
        ImageRgba::from_pixels(self.w, self.h, data)
    }

    /// Color-coded view of the classification: opaque white, boundary red,
    /// loose blue.
    pub fn debug_image(&self) -> ImageRgba {
        ImageRgba {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: self.states.iter().map(|s| s.debug_color()).collect(),
        }
    }
}

/// Classify `mask` with the default alpha threshold.
pub fn classify(mask: &ImageRgba) -> Result<Classification> {
    classify_with_threshold(mask, MASK_ALPHA_THRESHOLD)
}

/// Classify every pixel of `mask` as opaque, boundary or loose.
pub fn classify_with_threshold(mask: &ImageRgba, threshold: f32) -> Result<Classification> {
    mask.validate()?;
    let (w, h) = (mask.w, mask.h);
    let inside = |i: usize| mask.alpha_at(i) >= threshold;

    let mut states = Vec::with_capacity(mask.pixel_count());
    let mut frontier = Vec::new();
    for i in 0..mask.pixel_count() {
        let state = if inside(i) {
            PixelState::Opaque
        } else if neighbors(i, w, h).any(inside) {
            frontier.push(i);
            PixelState::Boundary
        } else {
            PixelState::Loose
        };
        states.push(state);
    }

    let counts = StateCounts::from_states(&states);
    debug!(
        "classify {}x{}: opaque={} boundary={} loose={}",
        w, h, counts.opaque, counts.boundary, counts.loose
    );
    Ok(Classification {
        w,
        h,
        states,
        frontier,
        counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_from_alpha(w: usize, h: usize, alpha: &[f32]) -> ImageRgba {
        let data = alpha.iter().map(|&a| Rgba::new(1.0, 1.0, 1.0, a)).collect();
        ImageRgba::from_pixels(w, h, data).unwrap()
    }

    #[test]
    fn center_seed_makes_ring_of_boundary() {
        #[rustfmt::skip]
        let mask = mask_from_alpha(5, 5, &[
            0.0, 0.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 0.0, 0.0,
        ]);
        let c = classify(&mask).unwrap();
        assert_eq!(c.states[12], PixelState::Opaque);
        assert_eq!(c.frontier, vec![6, 7, 8, 11, 13, 16, 17, 18]);
        assert_eq!(
            c.counts,
            StateCounts {
                opaque: 1,
                boundary: 8,
                loose: 16
            }
        );
        assert_eq!(c.states[0], PixelState::Loose);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mask = mask_from_alpha(3, 1, &[0.5, 0.49, 0.1]);
        let c = classify(&mask).unwrap();
        assert_eq!(
            c.states,
            vec![PixelState::Opaque, PixelState::Boundary, PixelState::Loose]
        );
    }

    #[test]
    fn seed_copies_only_opaque_colors() {
        let mask = mask_from_alpha(2, 1, &[1.0, 0.0]);
        let source = ImageRgba::from_pixels(2, 1, vec![Rgba::RED, Rgba::GREEN]).unwrap();
        let c = classify(&mask).unwrap();
        let seeded = c.seed_colors(&source).unwrap();
        assert_eq!(seeded.data, vec![Rgba::RED, Rgba::TRANSPARENT]);
    }

    #[test]
    fn seed_rejects_mismatched_source() {
        let mask = mask_from_alpha(2, 1, &[1.0, 0.0]);
        let source = ImageRgba::filled(3, 1, Rgba::RED);
        let err = classify(&mask).unwrap().seed_colors(&source).unwrap_err();
        assert!(matches!(err, BleedError::ShapeMismatch { color: 3, mask: 2, .. }));
    }

    #[test]
    fn debug_image_uses_state_colors() {
        let mask = mask_from_alpha(3, 1, &[1.0, 0.0, 0.0]);
        let img = classify(&mask).unwrap().debug_image();
        assert_eq!(img.data, vec![Rgba::WHITE, Rgba::RED, Rgba::BLUE]);
    }
}
