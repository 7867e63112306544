//! Global brightness with smooth, frame-timed fades
//!
//! Used for the user brightness level and for the fade-out/fade-in around
//! effect switches.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Filter;
use crate::{color::Rgb, math8::scale8, transition::FrameTransition};

/// Output range the user brightness (0-255) is mapped onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessRange {
    min: u8,
    max: u8,
}

impl BrightnessRange {
    /// Create a range; bounds are swapped if given in reverse
    pub const fn new(min: u8, max: u8) -> Self {
        if min > max {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    pub const fn min(self) -> u8 {
        self.min
    }

    pub const fn max(self) -> u8 {
        self.max
    }

    /// Map a user brightness into the range; 0 stays 0
    pub const fn map(self, brightness: u8) -> u8 {
        if brightness == 0 {
            return 0;
        }
        let span = self.max - self.min;
        scale8(brightness, span).saturating_add(self.min)
    }
}

impl Default for BrightnessRange {
    fn default() -> Self {
        Self::new(0, 255)
    }
}

/// Brightness transition and scaling
#[derive(Debug, Clone)]
pub(crate) struct BrightnessFilter {
    range: BrightnessRange,
    /// Current output brightness (0-255)
    brightness: FrameTransition<u8>,
}

impl BrightnessFilter {
    pub(crate) const fn new(brightness: u8, range: BrightnessRange) -> Self {
        Self {
            range,
            brightness: FrameTransition::new_u8(range.map(brightness)),
        }
    }

    /// Move to a user brightness over `duration` frames
    pub(crate) fn set(&mut self, brightness: u8, duration: u32, frame: u64) {
        let corrected = self.range.map(brightness);
        #[cfg(feature = "esp32-log")]
        println!(
            "[BrightnessFilter.set] setting brightness to {:?} ({:?})",
            brightness, corrected
        );
        self.brightness.set(corrected, duration, frame);
    }

    /// Move to a raw output brightness, bypassing the range
    pub(crate) fn set_uncorrected(&mut self, brightness: u8, duration: u32, frame: u64) {
        self.brightness.set(brightness, duration, frame);
    }

    pub(crate) fn set_range(&mut self, range: BrightnessRange) {
        self.range = range;
    }

    pub(crate) const fn current(&self) -> u8 {
        self.brightness.current()
    }

    pub(crate) const fn is_transitioning(&self) -> bool {
        self.brightness.is_transitioning()
    }
}

impl Filter for BrightnessFilter {
    fn apply(&mut self, frame: &mut [Rgb]) {
        let current = self.brightness.current();

        if current == 255 {
            return;
        }

        if current == 0 {
            frame.fill(Rgb::default());
            return;
        }

        for pixel in frame.iter_mut() {
            pixel.r = scale8(pixel.r, current);
            pixel.g = scale8(pixel.g, current);
            pixel.b = scale8(pixel.b, current);
        }
    }

    fn tick(&mut self, frame: u64) {
        self.brightness.tick(frame);
    }
}
