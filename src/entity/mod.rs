//! Simulated entities.
//!
//! Each effect owns exactly one entity kind. Kinds share the compositor
//! through [`Contribute`].

mod ball;
mod comet;
mod firework;
mod glow;
mod rain_drop;

pub use ball::Ball;
pub use comet::Comet;
pub use firework::{
    Firework, FireworkState, IGNITION_DELAY, MAX_PARTICLES, Particle, TRAIL_EXPONENT,
};
pub use glow::Glow;
pub use rain_drop::{DropGlyph, RainDrop};

use crate::color::Rgbf;

/// A single entity's light at one pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    /// 0.0-1.0
    pub brightness: f32,
    /// Full-intensity color; the compositor applies `brightness`
    pub color: Rgbf,
}

/// Contribution function of an entity kind
pub trait Contribute {
    /// Light this entity adds at `index`, if any
    fn contribution(&self, index: usize) -> Option<Contribution>;
}
