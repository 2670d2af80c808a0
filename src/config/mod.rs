//! JSON configuration for the command-line tools.

pub mod bleed;

pub use bleed::{load_config, BleedOutputConfig, BleedToolConfig, MaskSource};
