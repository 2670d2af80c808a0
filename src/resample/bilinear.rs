//! Bilinear sampling with edge clamping.
//!
//! Normalized coordinates `(u, v)` in `[0, 1]` address the source image with
//! the pixel-center convention: `u = (x + 0.5) / w` lands exactly on the center
//! of column `x`. Neighbor taps that fall outside the image clamp to the
//! nearest edge sample, never wrap.
use crate::image::{ImageRgba, ImageView, Rgba};

/// Normalized coordinate of the center of cell `i` out of `n`.
#[inline]
pub fn pixel_center(i: usize, n: usize) -> f32 {
    (i as f32 + 0.5) / n as f32
}

/// Normalized sampling coordinates for every pixel of a `width × height` grid,
/// row-major, as `[u, v]` pairs.
pub fn pixel_centers(width: usize, height: usize) -> Vec<[f32; 2]> {
    let xs: Vec<f32> = (0..width).map(|x| pixel_center(x, width)).collect();
    (0..height)
        .flat_map(|y| {
            let v = pixel_center(y, height);
            xs.iter().map(move |&u| [u, v])
        })
        .collect()
}

/// Sample `src` at normalized `(u, v)` with bilinear weights.
///
/// `src` must be non-empty; callers validate dimensions before sampling.
pub fn sample_bilinear(src: &ImageRgba, u: f32, v: f32) -> Rgba {
    let (x0, x1, fx) = taps(u, src.w);
    let (y0, y1, fy) = taps(v, src.h);
    let top = src.row(y0);
    let bottom = src.row(y1);
    let upper = top[x0].lerp(top[x1], fx);
    let lower = bottom[x0].lerp(bottom[x1], fx);
    upper.lerp(lower, fy)
}

/// Integer taps and fractional weight along one axis.
#[inline]
fn taps(t: f32, n: usize) -> (usize, usize, f32) {
    let s = t * n as f32 - 0.5;
    let base = s.floor();
    let frac = s - base;
    let i0 = base as isize;
    (clamp_index(i0, n), clamp_index(i0 + 1, n), frac)
}

#[inline]
pub(crate) fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 {
        return 0;
    }
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_are_half_pixel_offsets() {
        let centers = pixel_centers(2, 4);
        assert_eq!(centers.len(), 8);
        assert_eq!(centers[0], [0.25, 0.125]);
        assert_eq!(centers[1], [0.75, 0.125]);
        assert_eq!(centers[7], [0.75, 0.875]);
    }

    #[test]
    fn sampling_a_pixel_center_returns_that_pixel() {
        let mut img = ImageRgba::new(3, 3);
        img.set(1, 1, Rgba::GREEN);
        let c = sample_bilinear(&img, pixel_center(1, 3), pixel_center(1, 3));
        assert_eq!(c, Rgba::GREEN);
    }

    #[test]
    fn sampling_between_columns_averages() {
        let img = ImageRgba::from_pixels(2, 1, vec![Rgba::RED, Rgba::GREEN]).unwrap();
        let c = sample_bilinear(&img, 0.5, 0.5);
        assert_eq!(c, Rgba::new(0.5, 0.5, 0.0, 1.0));
    }

    #[test]
    fn clamp_index_saturates_both_ends() {
        assert_eq!(clamp_index(-3, 4), 0);
        assert_eq!(clamp_index(2, 4), 2);
        assert_eq!(clamp_index(9, 4), 3);
    }
}
