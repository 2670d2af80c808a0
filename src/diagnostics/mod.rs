//! Diagnostics returned by the bleeder and written by the CLI.
//!
//! `BleedReport` bundles the bled image with a serializable `BleedTrace`
//! describing input sizes, classification counts, propagation statistics and
//! per-stage timings.

pub mod report;
pub mod timing;

pub use report::{BleedReport, BleedTrace, InputDescriptor};
pub use timing::{StageTiming, TimingBreakdown};
