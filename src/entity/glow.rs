use super::{Contribute, Contribution};
use crate::color::hsv_to_rgbf;
use crate::compositor::falloff;
use crate::simulation::{BounceOutcome, Gravity, advance_gravity};

const GLOW_RADIUS: f32 = 3.0;
const GLOW_EXPONENT: f32 = 2.0;

/// Soft glowing ball falling under gravity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    /// Distance above the floor (pixel 0)
    pub height: f32,
    pub velocity: f32,
    pub hue: f32,
}

impl Glow {
    pub const fn new(height: f32, hue: f32) -> Self {
        Self {
            height,
            velocity: 0.0,
            hue,
        }
    }

    pub fn advance(&mut self, gravity: &Gravity, top: f32) -> BounceOutcome {
        advance_gravity(&mut self.height, &mut self.velocity, gravity, top)
    }
}

impl Contribute for Glow {
    #[allow(clippy::cast_precision_loss)]
    fn contribution(&self, index: usize) -> Option<Contribution> {
        let distance = libm::fabsf(index as f32 - self.height);
        if distance >= GLOW_RADIUS {
            return None;
        }
        let brightness = falloff(distance, GLOW_RADIUS, GLOW_EXPONENT)?;
        Some(Contribution {
            brightness,
            color: hsv_to_rgbf(self.hue, 1.0, 1.0),
        })
    }
}
