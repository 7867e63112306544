//! Merging of simultaneous entity contributions into one color per pixel.
//!
//! Two policies exist:
//! - [`AdditiveMix`]: overlapping glows sum their colors and are normalized
//!   so nothing clips while ratios are preserved.
//! - [`PixelBuffer`]: a dense per-frame buffer where trails claim pixels
//!   (brighter wins) or accumulate up to a cap; color is taken from the last
//!   claimant rather than blended.

use crate::color::{Rgb, Rgbf};
use crate::entity::{Contribute, Contribution};

/// Raw brightness ceiling for accumulated pixels before the output clamp
pub const DEFAULT_CAP: f32 = 2.0;

/// Power-law falloff `(1 - distance / radius) ^ exponent`
///
/// Returns `None` outside the radius or for a degenerate radius.
pub fn falloff(distance: f32, radius: f32, exponent: f32) -> Option<f32> {
    let distance = libm::fabsf(distance);
    if radius <= 0.0 || distance > radius || distance.is_nan() {
        return None;
    }
    let brightness = libm::powf(1.0 - distance / radius, exponent);
    Some(brightness.clamp(0.0, 1.0))
}

/// Additive-normalized accumulator for a single pixel
#[derive(Debug, Clone, Copy, Default)]
pub struct AdditiveMix {
    sum: Rgbf,
    max_brightness: f32,
}

impl AdditiveMix {
    pub const fn new() -> Self {
        Self {
            sum: Rgbf::BLACK,
            max_brightness: 0.0,
        }
    }

    /// Add one entity's weighted color
    pub fn add(&mut self, contribution: Contribution) {
        if contribution.brightness <= 0.0 {
            return;
        }
        self.sum += contribution.color.scale(contribution.brightness);
        self.max_brightness = self.max_brightness.max(contribution.brightness);
    }

    /// Brightest single contribution seen so far
    pub const fn max_brightness(&self) -> f32 {
        self.max_brightness
    }

    /// Final in-range color
    pub fn finish(self) -> Rgbf {
        if self.max_brightness <= 0.0 {
            return Rgbf::BLACK;
        }
        let mut color = self.sum;
        if self.max_brightness > 1.0 {
            color = color.scale(1.0 / self.max_brightness);
        }
        color.normalized().clamped()
    }
}

/// Additive-normalized composite of `entities` at `index`
pub fn composite_additive<E: Contribute>(entities: &[E], index: usize) -> Rgbf {
    let mut mix = AdditiveMix::new();
    for entity in entities {
        if let Some(contribution) = entity.contribution(index) {
            mix.add(contribution);
        }
    }
    mix.finish()
}

/// Dense per-pixel brightness/color buffer, rebuilt every frame
///
/// `N` is the capacity; only the first `len` pixels are addressable.
/// Writes outside the track are ignored and reads return black.
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    brightness: [f32; N],
    colors: [Option<Rgb>; N],
    len: usize,
    cap: f32,
}

impl<const N: usize> PixelBuffer<N> {
    pub const fn new(len: usize) -> Self {
        Self::with_cap(len, DEFAULT_CAP)
    }

    pub const fn with_cap(len: usize, cap: f32) -> Self {
        Self {
            brightness: [0.0; N],
            colors: [None; N],
            len: if len < N { len } else { N },
            cap,
        }
    }

    /// Number of addressable pixels
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Forget everything drawn in the previous frame
    pub fn clear(&mut self) {
        self.brightness[..self.len].fill(0.0);
        self.colors[..self.len].fill(None);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn slot(&self, index: i64) -> Option<usize> {
        if index < 0 || index >= self.len as i64 {
            return None;
        }
        Some(index as usize)
    }

    /// Take the pixel if `brightness` beats what is already there
    pub fn claim_brighter(&mut self, index: i64, brightness: f32, color: Rgb) {
        let Some(slot) = self.slot(index) else {
            return;
        };
        if self.brightness[slot] < brightness {
            self.brightness[slot] = brightness.min(self.cap);
            self.colors[slot] = Some(color);
        }
    }

    /// Add `brightness` up to the cap; the color follows the latest claimant
    pub fn accumulate(&mut self, index: i64, brightness: f32, color: Rgb) {
        let Some(slot) = self.slot(index) else {
            return;
        };
        self.brightness[slot] = (self.brightness[slot] + brightness).min(self.cap);
        self.colors[slot] = Some(color);
    }

    /// Raw (uncapped-by-output) brightness at `index`
    pub fn brightness_at(&self, index: usize) -> f32 {
        if index < self.len {
            self.brightness[index]
        } else {
            0.0
        }
    }

    /// Output color at `index`, brightness clamped to the unit range
    pub fn sample(&self, index: usize) -> Rgbf {
        if index >= self.len {
            return Rgbf::BLACK;
        }
        match self.colors[index] {
            Some(color) => Rgbf::from_rgb(color)
                .scale(self.brightness[index].clamp(0.0, 1.0))
                .clamped(),
            None => Rgbf::BLACK,
        }
    }
}
