//! Wavefront propagation of shell colors into the background.
//!
//! Starting from the boundary ring produced by [`crate::classify`], each round
//! resolves every frontier pixel to the unweighted mean of its already opaque
//! 8-neighbors and promotes the loose pixels it touches into the next frontier.
//! Resolutions are committed as a batch at the end of the round, so a pixel
//! never averages over a color produced in the same round and the result does
//! not depend on frontier order.
//!
//! Invariants
//! - States only move `Loose → Boundary → Opaque`.
//! - Averaging is channel-wise arithmetic mean over the contributing
//!   neighbors, all weighted equally. No gamma, no distance weighting.
//! - Either every pixel resolves or an error is returned; partially bled
//!   buffers never leave this module.

mod stats;

use crate::classify::{neighbors, PixelState};
use crate::error::{BleedError, Result};
use crate::image::{ImageRgba, Rgba};
use log::{debug, error, warn};
use serde::Deserialize;
use std::time::Instant;

pub use stats::PropagationStats;

/// Colors cycled per round by the fill-order debug view.
pub const FILL_DEBUG_COLORS: [Rgba; 4] = [Rgba::WHITE, Rgba::RED, Rgba::BLUE, Rgba::GREEN];

/// Options controlling propagation.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PropagateOptions {
    /// Upper bound on rounds. `None` uses `max(w, h)`, which a connected grid
    /// never exceeds.
    pub max_rounds: Option<usize>,
    /// Paint each round with a cycling diagnostic color instead of the average.
    pub debug_fill: bool,
}

impl PropagateOptions {
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    pub fn with_debug_fill(mut self, debug_fill: bool) -> Self {
        self.debug_fill = debug_fill;
        self
    }

    fn round_limit(&self, w: usize, h: usize) -> usize {
        self.max_rounds.unwrap_or_else(|| w.max(h))
    }
}

/// Fully resolved image plus per-round statistics.
#[derive(Clone, Debug)]
pub struct Propagation {
    pub image: ImageRgba,
    pub stats: PropagationStats,
}

/// Resolve every non-opaque pixel of `seed_colors` by wavefront averaging.
///
/// `states` holds one classification state per pixel; opaque pixels keep
/// their color from `seed_colors`.
pub fn propagate(
    states: &[PixelState],
    seed_colors: &ImageRgba,
    w: usize,
    h: usize,
) -> Result<ImageRgba> {
    propagate_with_options(states, seed_colors, w, h, &PropagateOptions::default())
        .map(|p| p.image)
}

/// [`propagate`] with explicit options, returning statistics as well.
pub fn propagate_with_options(
    states: &[PixelState],
    seed_colors: &ImageRgba,
    w: usize,
    h: usize,
    options: &PropagateOptions,
) -> Result<Propagation> {
    let expected = BleedError::check_dimensions(w, h)?;
    if seed_colors.pixel_count() != expected || states.len() != expected {
        return Err(BleedError::ShapeMismatch {
            color: seed_colors.pixel_count(),
            mask: states.len(),
            expected,
        });
    }
    if !states.contains(&PixelState::Opaque) {
        warn!("propagate: no opaque pixel in {}x{} mask", w, h);
        return Err(BleedError::NoSeedRegion);
    }

    let start = Instant::now();
    let max_rounds = options.round_limit(w, h);
    let mut states = states.to_vec();
    let mut image = ImageRgba {
        w,
        h,
        stride: w,
        data: seed_colors.data.clone(),
    };
    let mut frontier: Vec<usize> = states
        .iter()
        .enumerate()
        .filter_map(|(i, s)| (*s == PixelState::Boundary).then_some(i))
        .collect();
    let mut next = Vec::with_capacity(frontier.len());
    let mut resolved: Vec<(usize, Rgba)> = Vec::with_capacity(frontier.len());
    let mut stats = PropagationStats::default();

    while !frontier.is_empty() {
        if stats.rounds >= max_rounds {
            warn!(
                "propagate: round limit {} hit with {} frontier pixels",
                max_rounds,
                frontier.len()
            );
            return Err(BleedError::RoundLimitExceeded { max_rounds });
        }
        let fill_color = FILL_DEBUG_COLORS[stats.rounds % FILL_DEBUG_COLORS.len()];

        for &i in &frontier {
            let mut sum = Rgba::TRANSPARENT;
            let mut count = 0u32;
            for n in neighbors(i, w, h) {
                if states[n] == PixelState::Opaque {
                    sum += image.data[n];
                    count += 1;
                }
            }

            if count == 0 {
                next.push(i);
                continue;
            }

            let color = if options.debug_fill {
                fill_color
            } else {
                sum / count as f32
            };
            resolved.push((i, color));
            for n in neighbors(i, w, h) {
                if states[n] == PixelState::Loose {
                    states[n] = PixelState::Boundary;
                    next.push(n);
                }
            }
        }

        if resolved.is_empty() {
            warn!(
                "propagate: frontier of {} pixels has no opaque neighbor",
                frontier.len()
            );
            return Err(BleedError::NoSeedRegion);
        }

        // Commit the whole round at once.
        for &(i, color) in &resolved {
            image.data[i] = color;
            states[i] = PixelState::Opaque;
        }
        stats.record_round(resolved.len());
        resolved.clear();

        std::mem::swap(&mut frontier, &mut next);
        next.clear();
    }

    let unresolved = states.iter().filter(|s| **s != PixelState::Opaque).count();
    if unresolved > 0 {
        error!(
            "propagate: {} pixels unreachable from the shell after {} rounds",
            unresolved, stats.rounds
        );
        return Err(BleedError::Unresolved { count: unresolved });
    }

    stats.elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "propagate {}x{}: rounds={} resolved={} in {:.3} ms",
        w, h, stats.rounds, stats.resolved_total, stats.elapsed_ms
    );
    Ok(Propagation { image, stats })
}
