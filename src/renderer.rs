#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bounds::{RenderingBounds, bounded};
use crate::color::Rgb;
use crate::effect::{Effect, EffectId, EffectSlot};
use crate::filter::{BrightnessFilter, BrightnessRange, Filter};

/// Step between seeds of consecutive effect instances
const SEED_STEP: u64 = 0x9e37_79b9_7f4a_7c15;

/// Lengths of renderer transitions, in frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTimings {
    /// Fade-out before an effect switch
    pub fade_out: u32,
    /// Fade-in after an effect switch
    pub fade_in: u32,
    /// Brightness change
    pub brightness: u32,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            fade_out: 30,
            fade_in: 30,
            brightness: 15,
        }
    }
}

/// Configuration for the renderer
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub effect: EffectId,
    pub bounds: RenderingBounds,
    pub brightness: u8,
    pub brightness_range: BrightnessRange,
    pub timings: TransitionTimings,
    /// Seed of the first effect instance
    pub seed: u64,
}

impl EngineConfig {
    /// Defaults for a strip of `count` pixels
    pub fn new(count: u16) -> Self {
        Self {
            effect: EffectId::default(),
            bounds: RenderingBounds::first(count),
            brightness: 255,
            brightness_range: BrightnessRange::default(),
            timings: TransitionTimings::default(),
            seed: 0,
        }
    }

    #[must_use]
    pub const fn with_effect(mut self, effect: EffectId) -> Self {
        self.effect = effect;
        self
    }

    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    #[must_use]
    pub const fn with_timings(mut self, timings: TransitionTimings) -> Self {
        self.timings = timings;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Renderer - drives the active effect and produces output frames
///
/// Each call to [`Renderer::render`] is one logical frame: the effect is
/// updated once, then queried once per pixel inside the rendering bounds.
pub struct Renderer<const MAX_LEDS: usize> {
    timings: TransitionTimings,
    bounds: RenderingBounds,

    effect: EffectSlot<MAX_LEDS>,
    /// Effect waiting for the fade-out to finish
    pending: Option<EffectId>,
    brightness: u8,
    seed: u64,
    frame: u64,
    frame_buffer: [Rgb; MAX_LEDS],

    filter: BrightnessFilter,
}

impl<const MAX_LEDS: usize> Renderer<MAX_LEDS> {
    pub fn new(config: &EngineConfig) -> Self {
        let bounds = config.bounds.clamp_to(MAX_LEDS);
        Self {
            timings: config.timings,
            bounds,
            effect: config
                .effect
                .to_slot(usize::from(bounds.count()), config.seed),
            pending: None,
            brightness: config.brightness,
            seed: config.seed,
            frame: 0,
            frame_buffer: [Rgb::default(); MAX_LEDS],
            filter: BrightnessFilter::new(config.brightness, config.brightness_range),
        }
    }

    /// Process one frame
    ///
    /// This is the main render loop step. Call this once per frame.
    pub fn render(&mut self) -> &[Rgb] {
        let frame = self.frame;
        self.frame += 1;

        self.filter.tick(frame);
        self.finish_switch(frame);

        self.effect.update(frame);

        let leds = bounded(&mut self.frame_buffer, self.bounds);
        for (index, pixel) in leds.iter_mut().enumerate() {
            *pixel = self.effect.query(index, frame).to_rgb();
        }
        self.filter.apply(leds);

        leds
    }

    /// Switch to another effect, fading out the current one first
    pub fn switch_effect(&mut self, effect: EffectId) {
        #[cfg(feature = "esp32-log")]
        println!("[Renderer.switch_effect] switching to {}", effect.as_str());

        self.pending = Some(effect);
        self.filter
            .set_uncorrected(0, self.timings.fade_out, self.frame);
        self.finish_switch(self.frame);
    }

    /// Change the global brightness
    ///
    /// During an effect switch the new level is used by the fade-in.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
        if self.pending.is_none() {
            self.filter
                .set(brightness, self.timings.brightness, self.frame);
        }
    }

    pub fn set_brightness_range(&mut self, range: BrightnessRange) {
        self.filter.set_range(range);
        if self.pending.is_none() {
            self.filter.set(self.brightness, 0, self.frame);
        }
    }

    /// Change the rendered sub-range; the effect restarts for the new length
    pub fn set_bounds(&mut self, bounds: RenderingBounds) {
        self.bounds = bounds.clamp_to(MAX_LEDS);
        self.frame_buffer.fill(Rgb::default());
        let id = self.effect.id();
        self.install(id);
    }

    /// Restart the active effect
    pub fn reset_effect(&mut self) {
        self.effect.reset();
    }

    pub const fn effect(&self) -> &EffectSlot<MAX_LEDS> {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut EffectSlot<MAX_LEDS> {
        &mut self.effect
    }

    /// Number of frames rendered so far
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    pub const fn bounds(&self) -> RenderingBounds {
        self.bounds
    }

    /// User brightness the renderer is heading to
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Output brightness applied to the current frame
    pub const fn output_brightness(&self) -> u8 {
        self.filter.current()
    }

    pub const fn is_switching(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some() || self.filter.is_transitioning()
    }

    /// Swap in the pending effect once the fade-out is over
    fn finish_switch(&mut self, frame: u64) {
        if self.filter.is_transitioning() {
            return;
        }
        let Some(effect) = self.pending.take() else {
            return;
        };
        self.install(effect);
        self.filter
            .set(self.brightness, self.timings.fade_in, frame);
    }

    fn install(&mut self, effect: EffectId) {
        self.seed = self.seed.wrapping_add(SEED_STEP);
        self.effect = effect.to_slot(usize::from(self.bounds.count()), self.seed);

        #[cfg(feature = "esp32-log")]
        println!(
            "[Renderer.install] {} on {} pixels",
            effect.as_str(),
            self.bounds.count()
        );
    }
}
