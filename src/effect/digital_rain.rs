//! Digital rain
//!
//! Green code drops fall from pixel 0 towards the end of the strip, each at
//! its own pace. Heads blink between two pale greens, tails fade out, and a
//! faint sparkle flickers on empty pixels.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::Effect;
use crate::{
    color::{Rgb, Rgbf},
    compositor::PixelBuffer,
    entity::RainDrop,
    lifecycle::{Population, chance},
    noise::noise,
};

/// Drop storage capacity
pub const MAX_DROPS: usize = 64;

const DEFAULT_SPAWN_CHANCE: f32 = 0.15;
const MIN_DROPS: usize = 5;
const PIXELS_PER_DROP: usize = 8;

const HEAD_BRIGHT: Rgb = Rgb {
    r: 230,
    g: 255,
    b: 230,
};
const HEAD_DIM: Rgb = Rgb {
    r: 128,
    g: 204,
    b: 128,
};
const TAIL: Rgb = Rgb { r: 0, g: 178, b: 0 };
const HEAD_BLINK_PERIOD: u64 = 4;

const SPARKLE: Rgbf = Rgbf::new(0.0, 0.1, 0.0);
const SPARKLE_CHANCE: f32 = 0.01;
const SPARKLE_SALT: u32 = 0x5EED_0001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitalRainConfig {
    /// Concurrent drops; `None` derives `max(5, len / 8)`
    pub max_drops: Option<usize>,
    pub spawn_chance: f32,
    pub sparkle: bool,
}

impl Default for DigitalRainConfig {
    fn default() -> Self {
        Self {
            max_drops: None,
            spawn_chance: DEFAULT_SPAWN_CHANCE,
            sparkle: true,
        }
    }
}

impl DigitalRainConfig {
    #[must_use]
    pub const fn with_max_drops(mut self, max_drops: usize) -> Self {
        self.max_drops = Some(max_drops);
        self
    }

    #[must_use]
    pub const fn with_spawn_chance(mut self, spawn_chance: f32) -> Self {
        self.spawn_chance = spawn_chance;
        self
    }

    #[must_use]
    pub const fn with_sparkle(mut self, sparkle: bool) -> Self {
        self.sparkle = sparkle;
        self
    }
}

/// Digital rain over a strip of up to `N` pixels
#[derive(Debug, Clone)]
pub struct DigitalRainEffect<const N: usize> {
    config: DigitalRainConfig,
    track_len: usize,
    seed: u64,
    rng: Pcg32,
    drops: Population<RainDrop, MAX_DROPS>,
    buffer: PixelBuffer<N>,
}

impl<const N: usize> DigitalRainEffect<N> {
    pub fn new(track_len: usize, seed: u64) -> Self {
        Self::with_config(track_len, seed, DigitalRainConfig::default())
    }

    pub fn with_config(track_len: usize, seed: u64, config: DigitalRainConfig) -> Self {
        let buffer = PixelBuffer::with_cap(track_len, 1.0);
        let limit = config
            .max_drops
            .unwrap_or_else(|| (buffer.len() / PIXELS_PER_DROP).max(MIN_DROPS));
        Self {
            config,
            track_len: buffer.len(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            drops: Population::new(limit),
            buffer,
        }
    }

    pub fn drops(&self) -> &[RainDrop] {
        self.drops.as_slice()
    }

    pub const fn max_drops(&self) -> usize {
        self.drops.limit()
    }

    fn draw(&mut self, frame: u64) {
        self.buffer.clear();
        let head_color = if frame % HEAD_BLINK_PERIOD < HEAD_BLINK_PERIOD / 2 {
            HEAD_BRIGHT
        } else {
            HEAD_DIM
        };

        for drop in self.drops.iter() {
            self.buffer.claim_brighter(drop.head, 1.0, head_color);
            for distance in 1..=drop.length {
                let pixel = drop.head - i64::from(distance);
                self.buffer
                    .claim_brighter(pixel, drop.tail_brightness(distance), TAIL);
            }
        }
    }
}

impl<const N: usize> Effect for DigitalRainEffect<N> {
    fn update(&mut self, frame: u64) {
        for drop in self.drops.iter_mut() {
            drop.advance(&mut self.rng, frame);
        }
        let track_len = self.track_len;
        self.drops.cull(|drop| drop.is_done(track_len));

        let rng = &mut self.rng;
        let spawn_chance = self.config.spawn_chance;
        self.drops
            .spawn_with(|| chance(rng, spawn_chance).then(|| RainDrop::spawn(rng)));

        self.draw(frame);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn query(&self, index: usize, frame: u64) -> Rgbf {
        if index >= self.track_len {
            return Rgbf::BLACK;
        }
        if self.buffer.brightness_at(index) > 0.0 {
            return self.buffer.sample(index);
        }
        if self.config.sparkle && noise(frame, index as u32, SPARKLE_SALT) < SPARKLE_CHANCE {
            return SPARKLE;
        }
        Rgbf::BLACK
    }

    fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.drops.clear();
        self.buffer.clear();
    }
}
