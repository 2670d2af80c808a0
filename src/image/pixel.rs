//! Four-channel floating point color sample.
//!
//! Channels are stored as `[r, g, b, a]`, nominally in `[0, 1]`. Arithmetic is
//! plain channel-wise float math with no gamma handling, which is what the
//! bleed averaging and the bilinear resampler rely on.
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgba(pub [f32; 4]);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba([0.0, 0.0, 0.0, 0.0]);
    pub const WHITE: Rgba = Rgba([1.0, 1.0, 1.0, 1.0]);
    pub const RED: Rgba = Rgba([1.0, 0.0, 0.0, 1.0]);
    pub const GREEN: Rgba = Rgba([0.0, 1.0, 0.0, 1.0]);
    pub const BLUE: Rgba = Rgba([0.0, 0.0, 1.0, 1.0]);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }

    #[inline]
    pub fn r(&self) -> f32 {
        self.0[0]
    }
    #[inline]
    pub fn g(&self) -> f32 {
        self.0[1]
    }
    #[inline]
    pub fn b(&self) -> f32 {
        self.0[2]
    }
    #[inline]
    pub fn a(&self) -> f32 {
        self.0[3]
    }

    /// Linear interpolation `self + (other - self) * t`, per channel.
    #[inline]
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let mut out = self.0;
        for (c, o) in out.iter_mut().zip(other.0) {
            *c += (o - *c) * t;
        }
        Rgba(out)
    }

    /// Clamp every channel to `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Rgba {
        Rgba(self.0.map(|c| c.clamp(0.0, 1.0)))
    }

    /// Quantize to 8-bit channels with rounding.
    #[inline]
    pub fn to_u8(self) -> [u8; 4] {
        self.clamped().0.map(|c| (c * 255.0).round() as u8)
    }
}

impl Add for Rgba {
    type Output = Rgba;

    #[inline]
    fn add(mut self, rhs: Rgba) -> Rgba {
        self += rhs;
        self
    }
}

impl AddAssign for Rgba {
    #[inline]
    fn add_assign(&mut self, rhs: Rgba) {
        for (c, o) in self.0.iter_mut().zip(rhs.0) {
            *c += o;
        }
    }
}

impl Div<f32> for Rgba {
    type Output = Rgba;

    #[inline]
    fn div(self, rhs: f32) -> Rgba {
        Rgba(self.0.map(|c| c / rhs))
    }
}
