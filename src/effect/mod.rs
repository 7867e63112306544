//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect owns one entity kind and implements the `Effect` trait.

mod bouncing;
mod comets;
mod cradle;
mod digital_rain;
mod fireworks;

pub use bouncing::{BouncingBallsEffect, BouncingConfig, MAX_GLOWS};
pub use comets::{CometsConfig, CometsEffect, MAX_COMETS};
pub use cradle::{CradleConfig, CradleEffect, LayoutPreset, MAX_BALLS};
pub use digital_rain::{DigitalRainConfig, DigitalRainEffect, MAX_DROPS};
pub use fireworks::{FireworksConfig, FireworksEffect, MAX_FIREWORKS};

use crate::color::Rgbf;

const EFFECT_NAME_NEWTONS_CRADLE: &str = "newtons_cradle";
const EFFECT_NAME_FIREWORKS: &str = "fireworks";
const EFFECT_NAME_COMETS: &str = "comets";
const EFFECT_NAME_BOUNCING_BALLS: &str = "bouncing_balls";
const EFFECT_NAME_DIGITAL_RAIN: &str = "digital_rain";

const EFFECT_ID_NEWTONS_CRADLE: u8 = 0;
const EFFECT_ID_FIREWORKS: u8 = 1;
const EFFECT_ID_COMETS: u8 = 2;
const EFFECT_ID_BOUNCING_BALLS: u8 = 3;
const EFFECT_ID_DIGITAL_RAIN: u8 = 4;

/// Frame-stepped effect queried pixel by pixel
///
/// The host calls [`Effect::update`] once per frame, then [`Effect::query`]
/// once per pixel. Queries never change state, so asking for the same
/// `(index, frame)` twice yields the same color.
pub trait Effect {
    /// Advance the simulation to `frame`
    fn update(&mut self, frame: u64);

    /// Color of pixel `index`; channels are in the unit range
    fn query(&self, index: usize, frame: u64) -> Rgbf;

    /// Restart from the initial state
    fn reset(&mut self);
}

/// Effect slot - enum containing all possible effects
///
/// `N` bounds the strip length of the buffered effects.
#[derive(Debug, Clone)]
pub enum EffectSlot<const N: usize> {
    /// Colliding balls exchanging velocities
    NewtonsCradle(CradleEffect),
    /// Bursting fireworks
    Fireworks(FireworksEffect<N>),
    /// Comets with palette tails
    Comets(CometsEffect),
    /// Balls bouncing under gravity
    BouncingBalls(BouncingBallsEffect),
    /// Falling green code
    DigitalRain(DigitalRainEffect<N>),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum EffectId {
    #[default]
    NewtonsCradle = EFFECT_ID_NEWTONS_CRADLE,
    Fireworks = EFFECT_ID_FIREWORKS,
    Comets = EFFECT_ID_COMETS,
    BouncingBalls = EFFECT_ID_BOUNCING_BALLS,
    DigitalRain = EFFECT_ID_DIGITAL_RAIN,
}

impl EffectId {
    pub const ALL: [Self; 5] = [
        Self::NewtonsCradle,
        Self::Fireworks,
        Self::Comets,
        Self::BouncingBalls,
        Self::DigitalRain,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_NEWTONS_CRADLE => Self::NewtonsCradle,
            EFFECT_ID_FIREWORKS => Self::Fireworks,
            EFFECT_ID_COMETS => Self::Comets,
            EFFECT_ID_BOUNCING_BALLS => Self::BouncingBalls,
            EFFECT_ID_DIGITAL_RAIN => Self::DigitalRain,
            _ => return None,
        })
    }

    /// Create the effect for a strip of `track_len` pixels
    ///
    /// `seed` drives every random decision of the instance.
    pub fn to_slot<const N: usize>(self, track_len: usize, seed: u64) -> EffectSlot<N> {
        match self {
            Self::NewtonsCradle => EffectSlot::NewtonsCradle(CradleEffect::new(track_len, seed)),
            Self::Fireworks => EffectSlot::Fireworks(FireworksEffect::new(track_len, seed)),
            Self::Comets => EffectSlot::Comets(CometsEffect::new(track_len, seed)),
            Self::BouncingBalls => EffectSlot::BouncingBalls(BouncingBallsEffect::new(track_len)),
            Self::DigitalRain => EffectSlot::DigitalRain(DigitalRainEffect::new(track_len, seed)),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewtonsCradle => EFFECT_NAME_NEWTONS_CRADLE,
            Self::Fireworks => EFFECT_NAME_FIREWORKS,
            Self::Comets => EFFECT_NAME_COMETS,
            Self::BouncingBalls => EFFECT_NAME_BOUNCING_BALLS,
            Self::DigitalRain => EFFECT_NAME_DIGITAL_RAIN,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_NEWTONS_CRADLE => Some(Self::NewtonsCradle),
            EFFECT_NAME_FIREWORKS => Some(Self::Fireworks),
            EFFECT_NAME_COMETS => Some(Self::Comets),
            EFFECT_NAME_BOUNCING_BALLS => Some(Self::BouncingBalls),
            EFFECT_NAME_DIGITAL_RAIN => Some(Self::DigitalRain),
            _ => None,
        }
    }

    /// Parse a name, falling back to the default effect
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse_from_str(s).unwrap_or_default()
    }
}

impl<const N: usize> Default for EffectSlot<N> {
    fn default() -> Self {
        EffectId::default().to_slot(N, 0)
    }
}

impl<const N: usize> EffectSlot<N> {
    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::NewtonsCradle(_) => EffectId::NewtonsCradle,
            Self::Fireworks(_) => EffectId::Fireworks,
            Self::Comets(_) => EffectId::Comets,
            Self::BouncingBalls(_) => EffectId::BouncingBalls,
            Self::DigitalRain(_) => EffectId::DigitalRain,
        }
    }
}

impl<const N: usize> Effect for EffectSlot<N> {
    fn update(&mut self, frame: u64) {
        match self {
            Self::NewtonsCradle(effect) => effect.update(frame),
            Self::Fireworks(effect) => effect.update(frame),
            Self::Comets(effect) => effect.update(frame),
            Self::BouncingBalls(effect) => effect.update(frame),
            Self::DigitalRain(effect) => effect.update(frame),
        }
    }

    fn query(&self, index: usize, frame: u64) -> Rgbf {
        match self {
            Self::NewtonsCradle(effect) => effect.query(index, frame),
            Self::Fireworks(effect) => effect.query(index, frame),
            Self::Comets(effect) => effect.query(index, frame),
            Self::BouncingBalls(effect) => effect.query(index, frame),
            Self::DigitalRain(effect) => effect.query(index, frame),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::NewtonsCradle(effect) => Effect::reset(effect),
            Self::Fireworks(effect) => Effect::reset(effect),
            Self::Comets(effect) => Effect::reset(effect),
            Self::BouncingBalls(effect) => Effect::reset(effect),
            Self::DigitalRain(effect) => Effect::reset(effect),
        }
    }
}
