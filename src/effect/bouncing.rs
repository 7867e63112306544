//! Bouncing balls
//!
//! Three glowing balls fall under gravity from evenly spaced heights and
//! bounce on pixel 0, losing energy on every bounce. A ball too tired to
//! bounce is recharged at the top of the strip.

use heapless::Vec;

use super::Effect;
use crate::{
    color::Rgbf,
    compositor::composite_additive,
    entity::Glow,
    simulation::{BounceOutcome, Gravity},
};

/// Glow storage capacity
pub const MAX_GLOWS: usize = 8;

const DEFAULT_BALL_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BouncingConfig {
    /// At most [`MAX_GLOWS`]
    pub ball_count: usize,
    pub gravity: Gravity,
}

impl Default for BouncingConfig {
    fn default() -> Self {
        Self {
            ball_count: DEFAULT_BALL_COUNT,
            gravity: Gravity::default(),
        }
    }
}

impl BouncingConfig {
    #[must_use]
    pub const fn with_ball_count(mut self, count: usize) -> Self {
        self.ball_count = count;
        self
    }

    #[must_use]
    pub const fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }
}

#[derive(Debug, Clone)]
pub struct BouncingBallsEffect {
    config: BouncingConfig,
    track_len: usize,
    glows: Vec<Glow, MAX_GLOWS>,
    recharges: u32,
}

impl BouncingBallsEffect {
    pub fn new(track_len: usize) -> Self {
        Self::with_config(track_len, BouncingConfig::default())
    }

    pub fn with_config(track_len: usize, config: BouncingConfig) -> Self {
        let mut effect = Self {
            config,
            track_len,
            glows: Vec::new(),
            recharges: 0,
        };
        effect.drop_from_start();
        effect
    }

    pub fn glows(&self) -> &[Glow] {
        &self.glows
    }

    /// Recharges since the last reset
    pub const fn recharges(&self) -> u32 {
        self.recharges
    }

    /// Ball `i` of `k` starts at `len * (i + 1) / (k + 1)` with hue `i / k`
    #[allow(clippy::cast_precision_loss)]
    fn drop_from_start(&mut self) {
        self.glows.clear();
        self.recharges = 0;

        let count = self.config.ball_count.min(MAX_GLOWS);
        let len = self.track_len as f32;
        for i in 0..count {
            let height = len * (i + 1) as f32 / (count + 1) as f32;
            let hue = i as f32 / count as f32;
            if self.glows.push(Glow::new(height, hue)).is_err() {
                break;
            }
        }
    }
}

impl Effect for BouncingBallsEffect {
    #[allow(clippy::cast_precision_loss)]
    fn update(&mut self, _frame: u64) {
        let top = self.track_len as f32;
        let gravity = self.config.gravity;
        for glow in &mut self.glows {
            if glow.advance(&gravity, top) == BounceOutcome::Recharged {
                self.recharges += 1;
            }
        }
    }

    fn query(&self, index: usize, _frame: u64) -> Rgbf {
        if index >= self.track_len {
            return Rgbf::BLACK;
        }
        composite_additive(&self.glows, index)
    }

    fn reset(&mut self) {
        self.drop_from_start();
    }
}
