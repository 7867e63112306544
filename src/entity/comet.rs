use rand::Rng;

use super::{Contribute, Contribution};
use crate::color::{COMET_PALETTES, CometPalette, Rgbf, sample_palette};
use crate::compositor::falloff;

/// Tail falloff exponent
const TAIL_EXPONENT: f32 = 2.5;

/// Bright head with a fading tail, crossing the track once
#[derive(Debug, Clone, Copy)]
pub struct Comet {
    pub position: f32,
    /// Signed pixels per frame
    pub velocity: f32,
    pub tail_length: f32,
    pub palette: &'static CometPalette,
}

impl Comet {
    pub const fn new(
        position: f32,
        velocity: f32,
        tail_length: f32,
        palette: &'static CometPalette,
    ) -> Self {
        Self {
            position,
            velocity,
            tail_length,
            palette,
        }
    }

    /// Launch from a random end of the track, heading inwards
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, track_len: usize) -> Self {
        let from_start = rng.random_bool(0.5);
        let position = if from_start {
            0.0
        } else {
            track_len.saturating_sub(1) as f32
        };
        let speed = rng.random_range(0.3..1.2_f32);
        let velocity = if from_start { speed } else { -speed };

        let min_tail = (track_len / 8).max(1);
        let max_tail = (track_len / 3).max(min_tail);
        let tail_length = rng.random_range(min_tail..=max_tail) as f32;

        let palette = &COMET_PALETTES[rng.random_range(0..COMET_PALETTES.len())];
        Self::new(position, velocity, tail_length, palette)
    }

    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    /// Whole comet, tail included, has left the track
    #[allow(clippy::cast_precision_loss)]
    pub fn is_done(&self, track_len: usize) -> bool {
        if self.velocity >= 0.0 {
            self.position > track_len as f32 + self.tail_length
        } else {
            self.position < -self.tail_length
        }
    }
}

impl Contribute for Comet {
    #[allow(clippy::cast_precision_loss)]
    fn contribution(&self, index: usize) -> Option<Contribution> {
        let distance = libm::fabsf(index as f32 - self.position);
        let brightness = falloff(distance, self.tail_length, TAIL_EXPONENT)?;
        if brightness <= 0.0 {
            return None;
        }
        // Palettes are listed tail first: the index is mirrored so the head
        // takes the last entry and the tail end the first.
        let t = 1.0 - distance / self.tail_length;
        let color = sample_palette(self.palette.colors, t);
        Some(Contribution {
            brightness,
            color: Rgbf::from_rgb(color),
        })
    }
}
