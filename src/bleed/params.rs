//! Parameters for the bleed pipeline.

use crate::classify::MASK_ALPHA_THRESHOLD;
use crate::propagate::PropagateOptions;
use serde::{Deserialize, Serialize};

/// Alternate output paths for inspecting the algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebugView {
    /// Regular bleed output.
    #[default]
    None,
    /// Opaque white, boundary red, loose blue; no propagation.
    Classification,
    /// Each propagation round painted with a cycling palette.
    FillOrder,
}

/// Bleed configuration, deserializable from the CLI config.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BleedParams {
    /// Mask alpha at or above which a pixel belongs to a shell.
    pub mask_threshold: f32,
    /// Propagation round budget; `None` derives it from the image size.
    pub max_rounds: Option<usize>,
    pub debug_view: DebugView,
}

impl Default for BleedParams {
    fn default() -> Self {
        Self {
            mask_threshold: MASK_ALPHA_THRESHOLD,
            max_rounds: None,
            debug_view: DebugView::None,
        }
    }
}

impl BleedParams {
    pub fn with_debug_view(mut self, debug_view: DebugView) -> Self {
        self.debug_view = debug_view;
        self
    }

    pub fn propagate_options(&self) -> PropagateOptions {
        PropagateOptions {
            max_rounds: self.max_rounds,
            debug_fill: self.debug_view == DebugView::FillOrder,
        }
    }
}
