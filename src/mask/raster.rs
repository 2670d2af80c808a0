//! Software rasterization of UV triangles into a shell mask.
//!
//! A pixel belongs to a shell when its center lies inside, or exactly on an
//! edge of, any UV triangle. Both windings are accepted; zero-area triangles
//! cover nothing. Covered pixels are written with the fill color (opaque white
//! by default) over a fully transparent background.
use super::{ShellMaskProvider, UvMesh};
use crate::error::Result;
use crate::image::{ImageRgba, Rgba};
use log::debug;
use nalgebra::Vector2;

const AREA_EPS: f32 = 1e-12;

/// Rasterizes a [`UvMesh`] on the CPU.
#[derive(Clone, Copy, Debug)]
pub struct UvRasterizer {
    pub fill: Rgba,
}

impl Default for UvRasterizer {
    fn default() -> Self {
        Self { fill: Rgba::WHITE }
    }
}

#[inline]
fn edge(a: Vector2<f32>, b: Vector2<f32>, p: Vector2<f32>) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Map a uv to pixel space: `u` scales to columns, `v` is flipped so that
/// `v = 0` is the bottom row.
#[inline]
fn to_pixel(uv: Vector2<f32>, width: usize, height: usize) -> Vector2<f32> {
    Vector2::new(uv.x * width as f32, (1.0 - uv.y) * height as f32)
}

fn span(lo: f32, hi: f32, n: usize) -> Option<(usize, usize)> {
    // Centers at i + 0.5 within [lo, hi].
    let first = (lo - 0.5).ceil().max(0.0);
    let last = (hi - 0.5).floor().min(n as f32 - 1.0);
    (first <= last).then(|| (first as usize, last as usize))
}

impl UvRasterizer {
    fn fill_triangle(&self, mask: &mut ImageRgba, corners: [Vector2<f32>; 3]) -> usize {
        let [a, b, c] = corners.map(|uv| to_pixel(uv, mask.w, mask.h));
        let area = edge(a, b, c);
        if area.abs() <= AREA_EPS {
            return 0;
        }
        let sign = area.signum();
        let Some((x0, x1)) = span(a.x.min(b.x).min(c.x), a.x.max(b.x).max(c.x), mask.w) else {
            return 0;
        };
        let Some((y0, y1)) = span(a.y.min(b.y).min(c.y), a.y.max(b.y).max(c.y), mask.h) else {
            return 0;
        };

        let mut covered = 0;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Vector2::new(x as f32 + 0.5, y as f32 + 0.5);
                let inside = edge(b, c, p) * sign >= 0.0
                    && edge(c, a, p) * sign >= 0.0
                    && edge(a, b, p) * sign >= 0.0;
                if inside {
                    mask.set(x, y, self.fill);
                    covered += 1;
                }
            }
        }
        covered
    }
}

impl ShellMaskProvider for UvRasterizer {
    type Geometry = UvMesh;

    fn render_mask(&self, geometry: &UvMesh, width: usize, height: usize) -> Result<ImageRgba> {
        geometry.validate()?;
        let mut mask = ImageRgba::try_filled(width, height, Rgba::TRANSPARENT)?;
        let mut covered = 0;
        for t in 0..geometry.num_triangles() {
            covered += self.fill_triangle(&mut mask, geometry.triangle_uvs(t));
        }
        debug!(
            "UvRasterizer: {} triangles -> {} covered samples at {}x{}",
            geometry.num_triangles(),
            covered,
            width,
            height
        );
        Ok(mask)
    }
}
