//! Fireworks
//!
//! Shafts launch from pixel 0 at random intervals, climb while slowing
//! down and burst into particle clouds. Each frame is drawn into a dense
//! buffer during `update`; trails claim pixels, particles accumulate.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::Effect;
use crate::{
    color::Rgbf,
    compositor::PixelBuffer,
    entity::Firework,
    lifecycle::{LaunchGate, Population},
};

/// Firework storage capacity
pub const MAX_FIREWORKS: usize = 4;

const DEFAULT_MAX_ACTIVE: usize = 3;
const DEFAULT_MIN_GAP: u32 = 30;
const DEFAULT_MAX_GAP: u32 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireworksConfig {
    /// Concurrent fireworks, at most [`MAX_FIREWORKS`]
    pub max_active: usize,
    /// Launch spacing bounds in frames, drawn anew after every launch
    pub min_gap: u32,
    pub max_gap: u32,
}

impl Default for FireworksConfig {
    fn default() -> Self {
        Self {
            max_active: DEFAULT_MAX_ACTIVE,
            min_gap: DEFAULT_MIN_GAP,
            max_gap: DEFAULT_MAX_GAP,
        }
    }
}

impl FireworksConfig {
    #[must_use]
    pub const fn with_max_active(mut self, max_active: usize) -> Self {
        self.max_active = max_active;
        self
    }

    #[must_use]
    pub const fn with_launch_gap(mut self, min_gap: u32, max_gap: u32) -> Self {
        self.min_gap = min_gap;
        self.max_gap = max_gap;
        self
    }
}

/// Fireworks over a strip of up to `N` pixels
#[derive(Debug, Clone)]
pub struct FireworksEffect<const N: usize> {
    config: FireworksConfig,
    track_len: usize,
    seed: u64,
    rng: Pcg32,
    gate: LaunchGate,
    fireworks: Population<Firework, MAX_FIREWORKS>,
    buffer: PixelBuffer<N>,
}

impl<const N: usize> FireworksEffect<N> {
    pub fn new(track_len: usize, seed: u64) -> Self {
        Self::with_config(track_len, seed, FireworksConfig::default())
    }

    pub fn with_config(track_len: usize, seed: u64, config: FireworksConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let gate = LaunchGate::with_random_gap(config.min_gap, config.max_gap, &mut rng);
        let buffer = PixelBuffer::new(track_len);
        Self {
            config,
            track_len: buffer.len(),
            seed,
            rng,
            gate,
            fireworks: Population::new(config.max_active),
            buffer,
        }
    }

    pub fn fireworks(&self) -> &[Firework] {
        self.fireworks.as_slice()
    }

    pub const fn buffer(&self) -> &PixelBuffer<N> {
        &self.buffer
    }
}

impl<const N: usize> Effect for FireworksEffect<N> {
    fn update(&mut self, frame: u64) {
        self.buffer.clear();

        if self.fireworks.has_headroom() && self.gate.is_open(frame) {
            let firework = Firework::launch(&mut self.rng, self.track_len);
            if self.fireworks.spawn(firework).is_ok() {
                self.gate.record_launch(frame, &mut self.rng);
            }
        }

        self.fireworks.cull(Firework::is_spent);

        let track_len = self.track_len;
        for firework in self.fireworks.iter_mut() {
            firework.advance(&mut self.rng, frame, track_len);
            firework.draw(frame, &mut self.buffer);
        }
    }

    fn query(&self, index: usize, _frame: u64) -> Rgbf {
        self.buffer.sample(index)
    }

    fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.gate.reset(&mut self.rng);
        self.fireworks.clear();
        self.buffer.clear();
    }
}
