use crate::bleed::BleedParams;
use crate::image::io::load_rgba_image;
use crate::image::ImageRgba;
use crate::mask::{load_uv_mesh, ImageMask, ShellMaskProvider, UvRasterizer};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct BleedToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    pub mask: MaskSource,
    /// Output width; defaults to the source width.
    #[serde(default)]
    pub width: Option<usize>,
    /// Output height; defaults to the source height.
    #[serde(default)]
    pub height: Option<usize>,
    #[serde(default)]
    pub params: BleedParams,
    pub output: BleedOutputConfig,
}

/// Where the shell mask comes from.
///
/// `{"image": "mask.png"}` imports a rendered mask, `{"mesh": "uvs.json"}`
/// rasterizes a UV mesh.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskSource {
    Image(PathBuf),
    Mesh(PathBuf),
}

impl MaskSource {
    /// Produce the mask at `width × height`.
    pub fn load(&self, width: usize, height: usize) -> Result<ImageRgba, String> {
        match self {
            MaskSource::Image(path) => {
                let image = load_rgba_image(path)?;
                ImageMask
                    .render_mask(&image, width, height)
                    .map_err(|e| format!("Failed to resample mask {}: {e}", path.display()))
            }
            MaskSource::Mesh(path) => {
                let mesh = load_uv_mesh(path)?;
                UvRasterizer::default()
                    .render_mask(&mesh, width, height)
                    .map_err(|e| format!("Failed to rasterize {}: {e}", path.display()))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BleedOutputConfig {
    #[serde(rename = "image")]
    pub image: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
    #[serde(default)]
    pub classification_image: Option<PathBuf>,
}

impl BleedToolConfig {
    /// Output size, falling back to the source dimensions.
    pub fn target_size(&self, source: &ImageRgba) -> (usize, usize) {
        (
            self.width.unwrap_or(source.w),
            self.height.unwrap_or(source.h),
        )
    }
}

pub fn load_config(path: &Path) -> Result<BleedToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
