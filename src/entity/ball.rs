use super::{Contribute, Contribution};
use crate::color::hsv_to_rgbf;

/// Share of the radius that is fully lit
const CORE_RATIO: f32 = 0.9;
/// Intensity at the inner edge of the rim
const RIM_INTENSITY: f32 = 0.8;

/// Rigid ball sliding along the track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Center position
    pub position: f32,
    /// Pixels per frame
    pub velocity: f32,
    pub diameter: f32,
    /// 0.0-1.0
    pub hue: f32,
    /// 0.0 renders white
    pub saturation: f32,
}

impl Ball {
    /// Create a white ball
    pub const fn new(position: f32, velocity: f32, diameter: f32) -> Self {
        Self {
            position,
            velocity,
            diameter,
            hue: 0.0,
            saturation: 0.0,
        }
    }

    #[must_use]
    pub const fn with_color(mut self, hue: f32, saturation: f32) -> Self {
        self.hue = hue;
        self.saturation = saturation;
        self
    }

    pub fn speed(&self) -> f32 {
        libm::fabsf(self.velocity)
    }

    pub fn left_edge(&self) -> f32 {
        self.position - self.diameter / 2.0
    }

    pub fn right_edge(&self) -> f32 {
        self.position + self.diameter / 2.0
    }

    /// Copy hue and saturation from another ball
    pub fn take_color_of(&mut self, other: &Self) {
        self.hue = other.hue;
        self.saturation = other.saturation;
    }

    fn glow(&self, distance: f32) -> f32 {
        let radius = self.diameter / 2.0;
        let core = radius * CORE_RATIO;
        if distance < core {
            let t = distance / core;
            1.0 - t * t
        } else if distance < radius {
            RIM_INTENSITY * (1.0 - (distance - core) / (radius - core))
        } else {
            0.0
        }
    }
}

impl Contribute for Ball {
    #[allow(clippy::cast_precision_loss)]
    fn contribution(&self, index: usize) -> Option<Contribution> {
        let distance = libm::fabsf(index as f32 - self.position);
        let brightness = self.glow(distance);
        if brightness <= 0.0 {
            return None;
        }
        Some(Contribution {
            brightness,
            color: hsv_to_rgbf(self.hue, self.saturation, 1.0),
        })
    }
}
