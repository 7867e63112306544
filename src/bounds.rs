use crate::Rgb;

/// Bounds of the rendering area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderingBounds {
    pub start: u16,
    pub end: u16,
}

impl RenderingBounds {
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Bounds covering the first `count` pixels
    pub const fn first(count: u16) -> Self {
        Self::new(0, count)
    }

    /// Get the number of LEDs in the rendering area
    pub const fn count(self) -> u16 {
        self.end.saturating_sub(self.start)
    }

    /// Bounds limited to a buffer of `len` pixels
    #[allow(clippy::cast_possible_truncation)]
    pub const fn clamp_to(self, len: usize) -> Self {
        let len = if len > u16::MAX as usize {
            u16::MAX
        } else {
            len as u16
        };
        let end = if self.end < len { self.end } else { len };
        let start = if self.start < end { self.start } else { end };
        Self { start, end }
    }
}

/// Get a slice of the LEDs within the bounds
pub(crate) fn bounded(leds: &mut [Rgb], bounds: RenderingBounds) -> &mut [Rgb] {
    let bounds = bounds.clamp_to(leds.len());
    &mut leds[bounds.start as usize..bounds.end as usize]
}
