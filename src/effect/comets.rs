//! Comets
//!
//! Up to a few comets cross the strip at a time, each entering from a
//! random end with its own speed, tail length and palette. Overlapping
//! comets add up and are normalized so neither clips.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::Effect;
use crate::{
    color::Rgbf,
    compositor::composite_additive,
    entity::Comet,
    lifecycle::{Population, chance},
};

/// Comet storage capacity
pub const MAX_COMETS: usize = 8;

const DEFAULT_MAX_ACTIVE: usize = 3;
const DEFAULT_SPAWN_CHANCE: f32 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CometsConfig {
    /// Concurrent comets, at most [`MAX_COMETS`]
    pub max_active: usize,
    /// Per-frame spawn probability while below `max_active`
    pub spawn_chance: f32,
}

impl Default for CometsConfig {
    fn default() -> Self {
        Self {
            max_active: DEFAULT_MAX_ACTIVE,
            spawn_chance: DEFAULT_SPAWN_CHANCE,
        }
    }
}

impl CometsConfig {
    #[must_use]
    pub const fn with_max_active(mut self, max_active: usize) -> Self {
        self.max_active = max_active;
        self
    }

    #[must_use]
    pub const fn with_spawn_chance(mut self, spawn_chance: f32) -> Self {
        self.spawn_chance = spawn_chance;
        self
    }
}

#[derive(Debug, Clone)]
pub struct CometsEffect {
    config: CometsConfig,
    track_len: usize,
    seed: u64,
    rng: Pcg32,
    comets: Population<Comet, MAX_COMETS>,
}

impl CometsEffect {
    pub fn new(track_len: usize, seed: u64) -> Self {
        Self::with_config(track_len, seed, CometsConfig::default())
    }

    pub fn with_config(track_len: usize, seed: u64, config: CometsConfig) -> Self {
        Self {
            config,
            track_len,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            comets: Population::new(config.max_active),
        }
    }

    pub fn comets(&self) -> &[Comet] {
        self.comets.as_slice()
    }
}

impl Effect for CometsEffect {
    fn update(&mut self, _frame: u64) {
        let rng = &mut self.rng;
        let (track_len, spawn_chance) = (self.track_len, self.config.spawn_chance);
        self.comets
            .spawn_with(|| chance(rng, spawn_chance).then(|| Comet::spawn(rng, track_len)));

        for comet in self.comets.iter_mut() {
            comet.advance();
        }

        self.comets.cull(|comet| comet.is_done(track_len));
    }

    fn query(&self, index: usize, _frame: u64) -> Rgbf {
        if index >= self.track_len {
            return Rgbf::BLACK;
        }
        composite_additive(self.comets.as_slice(), index)
    }

    fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.comets.clear();
    }
}
