//! Shell mask producers.
//!
//! The bleed only consumes a mask image whose alpha marks shell pixels. Any
//! [`ShellMaskProvider`] can produce it: [`UvRasterizer`] fills UV triangles in
//! software, [`ImageMask`] imports a mask that was rendered elsewhere.

mod mesh;
mod raster;

use crate::error::Result;
use crate::image::ImageRgba;
use crate::resample::resample;

pub use mesh::{load_uv_mesh, UvMesh};
pub use raster::UvRasterizer;

/// Produces a shell mask (alpha ≥ 0.5 inside) at a requested resolution.
pub trait ShellMaskProvider {
    type Geometry: ?Sized;

    fn render_mask(&self, geometry: &Self::Geometry, width: usize, height: usize)
        -> Result<ImageRgba>;
}

/// Precomputed mask import: the geometry is already a mask image and is
/// resampled to the requested resolution.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageMask;

impl ShellMaskProvider for ImageMask {
    type Geometry = ImageRgba;

    fn render_mask(&self, geometry: &ImageRgba, width: usize, height: usize) -> Result<ImageRgba> {
        resample(geometry, width, height)
    }
}
