use core::ops::{Add, AddAssign};

use super::Rgb;
use crate::math8::unit_to_u8;

/// Linear color with channels nominally in `0.0..=1.0`
///
/// This is the compositing currency: contributions are summed and scaled as
/// floats and only quantized to [`Rgb`] at the very end.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgbf {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgbf {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Convert an 8-bit color into unit channels
    pub fn from_rgb(color: Rgb) -> Self {
        Self {
            r: f32::from(color.r) / 255.0,
            g: f32::from(color.g) / 255.0,
            b: f32::from(color.b) / 255.0,
        }
    }

    /// Multiply every channel by `factor`
    #[must_use]
    pub fn scale(self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
        }
    }

    /// Largest channel value
    pub fn peak(self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    pub fn is_black(self) -> bool {
        self.peak() <= 0.0
    }

    /// Bring an over-range color back into the unit cube, keeping channel ratios
    #[must_use]
    pub fn normalized(self) -> Self {
        let peak = self.peak();
        if peak > 1.0 {
            self.scale(1.0 / peak)
        } else {
            self
        }
    }

    /// Clamp every channel into `0.0..=1.0` (NaN becomes 0)
    #[must_use]
    pub fn clamped(self) -> Self {
        let clamp = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self {
            r: clamp(self.r),
            g: clamp(self.g),
            b: clamp(self.b),
        }
    }

    /// Quantize to an 8-bit color
    pub fn to_rgb(self) -> Rgb {
        Rgb {
            r: unit_to_u8(self.r),
            g: unit_to_u8(self.g),
            b: unit_to_u8(self.b),
        }
    }
}

impl From<Rgb> for Rgbf {
    fn from(color: Rgb) -> Self {
        Self::from_rgb(color)
    }
}

impl Add for Rgbf {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl AddAssign for Rgbf {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
