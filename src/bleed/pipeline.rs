use super::params::{BleedParams, DebugView};
use crate::classify::classify_with_threshold;
use crate::diagnostics::{BleedReport, BleedTrace, InputDescriptor, TimingBreakdown};
use crate::error::{BleedError, Result};
use crate::image::ImageRgba;
use crate::propagate::propagate_with_options;
use crate::resample::resample_to_match;
use log::debug;
use std::time::Instant;

/// Edge bleeder orchestrating resampling, classification and propagation.
///
/// Holds only parameters; every call works on fresh buffers, so one bleeder
/// can be shared across threads and reused for any number of textures.
#[derive(Clone, Debug, Default)]
pub struct EdgeBleeder {
    params: BleedParams,
}

impl EdgeBleeder {
    /// Create a bleeder with the supplied parameters.
    pub fn new(params: BleedParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BleedParams {
        &self.params
    }

    /// Bleed `source` outward from the shells in `mask` at `width × height`.
    pub fn process(
        &self,
        source: &ImageRgba,
        mask: &ImageRgba,
        width: usize,
        height: usize,
    ) -> Result<ImageRgba> {
        self.process_with_diagnostics(source, mask, width, height)
            .map(|report| report.image)
    }

    /// Run the bleed and return both the image and a detailed trace.
    pub fn process_with_diagnostics(
        &self,
        source: &ImageRgba,
        mask: &ImageRgba,
        width: usize,
        height: usize,
    ) -> Result<BleedReport> {
        BleedError::check_dimensions(width, height)?;
        let input = InputDescriptor::new(source, mask, width, height);
        debug!(
            "EdgeBleeder::process source={}x{} mask={}x{} target={}x{} view={:?}",
            source.w, source.h, mask.w, mask.h, width, height, self.params.debug_view
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let (color, shell) = timings.measure("resample", || {
            Ok::<_, BleedError>((
                resample_to_match(source, width, height)?,
                resample_to_match(mask, width, height)?,
            ))
        })?;

        let (classification, seeds) = timings.measure("classify", || {
            let classification = classify_with_threshold(&shell, self.params.mask_threshold)?;
            let seeds = classification.seed_colors(&color)?;
            Ok::<_, BleedError>((classification, seeds))
        })?;

        let (image, propagation) = match self.params.debug_view {
            DebugView::Classification => (classification.debug_image(), None),
            DebugView::None | DebugView::FillOrder => {
                let options = self.params.propagate_options();
                let result = timings.measure("propagate", || {
                    propagate_with_options(&classification.states, &seeds, width, height, &options)
                })?;
                (result.image, Some(result.stats))
            }
        };

        timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "EdgeBleeder::process done rounds={} total_ms={:.3}",
            propagation.as_ref().map_or(0, |p| p.rounds),
            timings.total_ms
        );

        Ok(BleedReport {
            image,
            trace: BleedTrace {
                input,
                debug_view: self.params.debug_view,
                classification: classification.counts,
                propagation,
                timings,
            },
        })
    }
}
