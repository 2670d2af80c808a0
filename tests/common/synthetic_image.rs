use edge_bleed::image::{ImageRgba, Rgba};

/// Smooth color ramp: red grows left to right, green top to bottom.
pub fn gradient_rgba(width: usize, height: usize) -> ImageRgba {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = ImageRgba::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let r = x as f32 / width as f32;
            let g = y as f32 / height as f32;
            img.set(x, y, Rgba::new(r, g, 0.25, 1.0));
        }
    }
    img
}

/// Opaque white disc of `radius` pixels centred at `(cx, cy)` on a clear background.
pub fn disc_mask(width: usize, height: usize, cx: f32, cy: f32, radius: f32) -> ImageRgba {
    let mut mask = ImageRgba::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= radius * radius {
                mask.set(x, y, Rgba::WHITE);
            }
        }
    }
    mask
}

/// Mask with opaque pixels exactly at `points`.
pub fn point_mask(width: usize, height: usize, points: &[(usize, usize)]) -> ImageRgba {
    let mut mask = ImageRgba::new(width, height);
    for &(x, y) in points {
        mask.set(x, y, Rgba::WHITE);
    }
    mask
}
