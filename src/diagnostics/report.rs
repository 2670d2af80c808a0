use crate::bleed::DebugView;
use crate::classify::StateCounts;
use crate::diagnostics::TimingBreakdown;
use crate::image::ImageRgba;
use crate::propagate::PropagationStats;
use serde::Serialize;

/// Result produced by [`EdgeBleeder::process_with_diagnostics`](crate::EdgeBleeder).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BleedReport {
    #[serde(skip)]
    pub image: ImageRgba,
    pub trace: BleedTrace,
}

/// Trace of the stages one bleed run executed.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BleedTrace {
    pub input: InputDescriptor,
    pub debug_view: DebugView,
    pub classification: StateCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propagation: Option<PropagationStats>,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub source_size: [usize; 2],
    pub mask_size: [usize; 2],
    pub target_size: [usize; 2],
}

impl InputDescriptor {
    pub fn new(source: &ImageRgba, mask: &ImageRgba, width: usize, height: usize) -> Self {
        Self {
            source_size: [source.w, source.h],
            mask_size: [mask.w, mask.h],
            target_size: [width, height],
        }
    }

    /// True when the source had to be resampled to the target size.
    pub fn source_resampled(&self) -> bool {
        self.source_size != self.target_size
    }

    /// True when the mask had to be resampled to the target size.
    pub fn mask_resampled(&self) -> bool {
        self.mask_size != self.target_size
    }
}
