//! I/O helpers for RGBA textures and JSON.
//!
//! - `load_rgba_image`: read a PNG/JPEG/BMP into an owned f32 RGBA buffer.
//! - `save_rgba_image`: write an `ImageRgba` to an 8-bit RGBA PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageRgba, ImageView, Rgba};
use image::{ImageBuffer, Rgba as PixelRgba, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert channels to normalized f32.
pub fn load_rgba_image(path: &Path) -> Result<ImageRgba, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba32f();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.pixels().map(|p| Rgba(p.0)).collect();
    ImageRgba::from_pixels(width, height, data)
        .map_err(|e| format!("Failed to decode {}: {e}", path.display()))
}

/// Convert a float image to an 8-bit RGBA buffer, clamping channels to [0, 1].
pub fn to_rgba8(image: &ImageRgba) -> RgbaImage {
    let mut out: RgbaImage = ImageBuffer::new(image.w as u32, image.h as u32);
    for (y, row) in image.rows().enumerate() {
        for (x, px) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, PixelRgba(px.to_u8()));
        }
    }
    out
}

/// Save a float image to an RGBA PNG.
pub fn save_rgba_image(image: &ImageRgba, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    to_rgba8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn rgba8_conversion_keeps_layout() {
        let mut img = ImageRgba::new(2, 2);
        img.set(1, 0, Rgba::RED);
        img.set(0, 1, Rgba::new(0.0, 0.0, 1.0, 0.5));
        let out = to_rgba8(&img);
        assert_eq!(out.get_pixel(1, 0).0, [255, 0, 0, 255]);
        assert_eq!(out.get_pixel(0, 1).0, [0, 0, 255, 128]);
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn png_round_trip_preserves_pixels() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/texture.png");
        let img = ImageRgba::from_pixels(
            3,
            1,
            vec![Rgba::RED, Rgba::TRANSPARENT, Rgba::WHITE],
        )
        .unwrap();
        save_rgba_image(&img, &path).unwrap();
        let loaded = load_rgba_image(&path).unwrap();
        assert_eq!(loaded, img);
    }

    #[test]
    fn missing_image_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = load_rgba_image(&dir.path().join("absent.png")).unwrap_err();
        assert!(err.contains("absent.png"));
    }
}
