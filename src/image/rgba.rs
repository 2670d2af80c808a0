//! Owned RGBA f32 image in row-major layout (stride == width).
//!
//! Index convention used throughout the crate: `i = y * stride + x`, with
//! row 0 at the top of the image. Color sources and masks share this layout,
//! so a flat index means the same pixel in every buffer of equal size.
use super::pixel::Rgba;
use crate::error::{BleedError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct ImageRgba {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<Rgba>,
}

impl ImageRgba {
    /// Construct a fully transparent buffer of size `w × h`.
    ///
    /// # Panics
    /// If `w × h` is empty or overflows; see [`ImageRgba::try_filled`].
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, Rgba::TRANSPARENT)
    }

    /// Construct a buffer of size `w × h` with every pixel set to `color`.
    ///
    /// # Panics
    /// If `w × h` is empty or overflows; see [`ImageRgba::try_filled`].
    pub fn filled(w: usize, h: usize, color: Rgba) -> Self {
        match Self::try_filled(w, h, color) {
            Ok(img) => img,
            Err(err) => panic!("ImageRgba::filled: {err}"),
        }
    }

    /// Checked [`ImageRgba::filled`].
    pub fn try_filled(w: usize, h: usize, color: Rgba) -> Result<Self> {
        let len = BleedError::check_dimensions(w, h)?;
        Ok(Self {
            w,
            h,
            stride: w,
            data: vec![color; len],
        })
    }

    /// Wrap an existing pixel vector, checking it holds exactly `w * h` samples.
    pub fn from_pixels(w: usize, h: usize, data: Vec<Rgba>) -> Result<Self> {
        if data.len() != BleedError::check_dimensions(w, h)? {
            return Err(BleedError::DimensionMismatch {
                width: w,
                height: h,
                len: data.len(),
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Check positive dimensions and a buffer length matching them.
    pub fn validate(&self) -> Result<()> {
        let len = BleedError::check_dimensions(self.w, self.h)?;
        if self.stride != self.w || self.data.len() != len {
            return Err(BleedError::DimensionMismatch {
                width: self.w,
                height: self.h,
                len: self.data.len(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: Rgba) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
    #[inline]
    /// Alpha channel of the pixel at flat index `i`.
    pub fn alpha_at(&self, i: usize) -> f32 {
        self.data[i].a()
    }
}

impl crate::image::traits::ImageView for ImageRgba {
    type Pixel = Rgba;

    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgba] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;

    #[test]
    fn flat_index_is_row_major() {
        let mut img = ImageRgba::new(3, 2);
        img.set(2, 1, Rgba::RED);
        assert_eq!(img.idx(2, 1), 5);
        assert_eq!(img.data[5], Rgba::RED);
        assert_eq!(img.row(1)[2], Rgba::RED);
    }

    #[test]
    fn from_pixels_rejects_wrong_length() {
        let err = ImageRgba::from_pixels(2, 2, vec![Rgba::WHITE; 3]).unwrap_err();
        assert_eq!(
            err,
            BleedError::DimensionMismatch {
                width: 2,
                height: 2,
                len: 3
            }
        );
    }

    #[test]
    fn from_pixels_rejects_zero_dimensions() {
        let err = ImageRgba::from_pixels(0, 4, Vec::new()).unwrap_err();
        assert!(matches!(err, BleedError::InvalidDimensions { .. }));
    }

    #[test]
    fn oversized_dimensions_are_errors() {
        let err = ImageRgba::from_pixels(usize::MAX, 2, Vec::new()).unwrap_err();
        assert_eq!(
            err,
            BleedError::InvalidDimensions {
                width: usize::MAX,
                height: 2
            }
        );
        assert!(ImageRgba::try_filled(2, usize::MAX, Rgba::WHITE).is_err());

        let img = ImageRgba {
            w: usize::MAX,
            h: 3,
            stride: usize::MAX,
            data: Vec::new(),
        };
        assert!(img.validate().is_err());
    }
}
