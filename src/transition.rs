use crate::color::{Rgb, blend_colors};
use crate::math8::{blend8, progress8};

/// Blends two values of type `T` using a progress value (0-255)
pub type ValueBlender<T> = fn(T, T, u8) -> T;

/// Transition for values of type `T`, timed in frames
#[derive(Debug, Clone)]
pub struct FrameTransition<T: Copy> {
    /// Blender function
    blend: ValueBlender<T>,
    /// Current interpolated value
    current: T,
    /// Value at the start of transition
    source: T,
    /// Target value (None if no transition in progress)
    target: Option<T>,
    /// Total transition length in frames
    duration: u32,
    /// Frame at which the transition started
    start_frame: u64,
}

impl<T: Copy> FrameTransition<T> {
    /// Create a new value transition
    pub const fn new(initial: T, blend: ValueBlender<T>) -> Self {
        Self {
            blend,
            current: initial,
            source: initial,
            target: None,
            duration: 0,
            start_frame: 0,
        }
    }

    /// Get current value
    pub const fn current(&self) -> T {
        self.current
    }

    /// Value the transition is heading to, or the current one when idle
    pub fn target(&self) -> T {
        self.target.unwrap_or(self.current)
    }

    /// Check if a transition is in progress
    pub const fn is_transitioning(&self) -> bool {
        self.target.is_some()
    }

    /// Start moving towards `value` over `duration` frames from `frame`
    ///
    /// A zero duration applies the value immediately.
    pub fn set(&mut self, value: T, duration: u32, frame: u64) {
        self.start_frame = frame;
        if duration == 0 {
            self.current = value;
            self.source = value;
            self.target = None;
            self.duration = 0;
        } else {
            self.source = self.current;
            self.target = Some(value);
            self.duration = duration;
        }
    }

    /// Update transition state
    ///
    /// Call this once per frame.
    pub fn tick(&mut self, frame: u64) {
        let Some(target) = self.target else {
            return;
        };

        let elapsed = frame.saturating_sub(self.start_frame);
        if elapsed >= u64::from(self.duration) {
            self.current = target;
            self.source = target;
            self.target = None;
            return;
        }

        // elapsed < duration, so it fits
        #[allow(clippy::cast_possible_truncation)]
        let progress = progress8(elapsed as u32, self.duration);
        self.current = (self.blend)(self.source, target, progress);
    }
}

impl FrameTransition<u8> {
    /// Create a new u8 transition
    pub const fn new_u8(initial: u8) -> Self {
        Self::new(initial, blend8)
    }
}

impl FrameTransition<Rgb> {
    /// Create a new rgb transition
    pub const fn new_rgb(initial: Rgb) -> Self {
        Self::new(initial, blend_colors)
    }
}
