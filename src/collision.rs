//! Contact resolution between adjacent balls on the track.
//!
//! Runs once per frame after motion integration. All balls have equal mass,
//! so an elastic collision is an exact exchange of velocities. Pairs are
//! resolved independently in position order in a single pass, like one
//! physics tick rather than an iterated solver.

use rand::Rng;

use crate::color::HuePalette;
use crate::entity::Ball;
use crate::simulation::{Boundary, wrap};

/// How colors move between colliding balls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorTransfer {
    /// The faster ball is recolored from the palette
    #[default]
    Standard,
    /// A colored faster ball paints the slower one with its own color
    Infect,
}

/// Collision resolver for balls sharing one track
#[derive(Debug, Clone, Copy)]
pub struct CollisionResolver {
    pub track_len: f32,
    pub boundary: Boundary,
    pub transfer: ColorTransfer,
    pub palette: HuePalette,
}

impl CollisionResolver {
    pub const fn new(
        track_len: f32,
        boundary: Boundary,
        transfer: ColorTransfer,
        palette: HuePalette,
    ) -> Self {
        Self {
            track_len,
            boundary,
            transfer,
            palette,
        }
    }

    /// Sort `balls` by position and resolve every approaching overlap.
    ///
    /// Returns the number of collisions resolved this frame.
    pub fn resolve<R: Rng + ?Sized>(&self, balls: &mut [Ball], rng: &mut R) -> usize {
        let count = balls.len();
        if count < 2 {
            return 0;
        }

        balls.sort_unstable_by(|a, b| a.position.total_cmp(&b.position));

        let pairs = match self.boundary {
            Boundary::Wall => count - 1,
            Boundary::Wraparound => count,
        };

        let mut resolved = 0;
        for first in 0..pairs {
            let second = (first + 1) % count;
            let gap = self.gap(balls, first, second);
            let contact = (balls[first].diameter + balls[second].diameter) / 2.0;

            if gap >= contact {
                continue;
            }
            // Receding overlaps separate on their own next frame.
            if balls[first].velocity - balls[second].velocity <= 0.0 {
                continue;
            }

            self.collide(balls, first, second, contact - gap, rng);
            resolved += 1;
        }

        if self.boundary == Boundary::Wraparound {
            for ball in balls.iter_mut() {
                ball.position = wrap(ball.position, self.track_len);
            }
        }

        resolved
    }

    /// Center distance between a pair, measured across the seam for the
    /// closing (last, first) pair
    fn gap(&self, balls: &[Ball], first: usize, second: usize) -> f32 {
        if second != 0 {
            return balls[second].position - balls[first].position;
        }
        let direct = balls[first].position - balls[second].position;
        let across = self.track_len - direct;
        // With two balls the direct side is already covered by the (0, 1) pair.
        if balls.len() == 2 {
            across
        } else {
            direct.min(across)
        }
    }

    /// Shift a separated pair off a wall it was pushed through, keeping
    /// the gap between the two balls
    fn keep_pair_inside(&self, balls: &mut [Ball], first: usize, second: usize) {
        let shift = if balls[first].left_edge() < 0.0 {
            -balls[first].left_edge()
        } else if balls[second].right_edge() > self.track_len {
            self.track_len - balls[second].right_edge()
        } else {
            return;
        };
        balls[first].position += shift;
        balls[second].position += shift;
    }

    fn collide<R: Rng + ?Sized>(
        &self,
        balls: &mut [Ball],
        first: usize,
        second: usize,
        overlap: f32,
        rng: &mut R,
    ) {
        // Ties go to the second ball.
        let (faster, slower) = if balls[first].speed() > balls[second].speed() {
            (first, second)
        } else {
            (second, first)
        };

        let first_velocity = balls[first].velocity;
        balls[first].velocity = balls[second].velocity;
        balls[second].velocity = first_velocity;

        balls[first].position -= overlap / 2.0;
        balls[second].position += overlap / 2.0;
        if self.boundary == Boundary::Wall {
            self.keep_pair_inside(balls, first, second);
        }

        match self.transfer {
            ColorTransfer::Standard => {
                balls[faster].hue = self.palette.pick(rng);
                balls[faster].saturation = self.palette.saturation();
            }
            ColorTransfer::Infect => {
                let striker = balls[faster];
                if striker.saturation > 0.0 {
                    balls[slower].take_color_of(&striker);
                }
            }
        }
    }
}
