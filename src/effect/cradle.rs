//! Newton's cradle
//!
//! Rigid balls slide along the strip and exchange velocities on contact.
//! Every cycle picks a ball count, a layout and (optionally) a boundary
//! mode, then runs until the periodic reset starts the next cycle.

use heapless::Vec;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Effect;
use crate::{
    collision::{CollisionResolver, ColorTransfer},
    color::{HuePalette, Rgbf},
    compositor::composite_additive,
    entity::Ball,
    lifecycle::PeriodicReset,
    simulation::{Boundary, advance_constant, wrap},
};

/// Ball storage capacity
pub const MAX_BALLS: usize = 15;

const DEFAULT_DIAMETER: f32 = 8.0;
const DEFAULT_VELOCITY: f32 = 1.5;
const DEFAULT_RESET_INTERVAL: u32 = 1200;
const DEFAULT_BALL_COUNTS: &[usize] = &[5, 10, 15];

const OPPOSITE_SPEEDS: [f32; 2] = [1.2, 0.8];
const ALTERNATING_SPEEDS: [f32; 3] = [1.1, 0.9, 1.2];
const CLUSTER_SPEEDS: [f32; 4] = [1.2, 0.9, 1.1, 0.8];
const PACKED_SPEEDS: [f32; 5] = [0.8, 1.2, 0.6, 1.4, 1.0];
const PACKED_SPACING: f32 = 0.3;
const CLUSTER_SIZE: usize = 3;

/// Starting arrangement of a cycle
///
/// Each preset yields, per ball, the spacing multiplier of the gap after it
/// (0 = touching, 1 = even spread) and a speed multiplier (0 = at rest).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPreset {
    /// One striker, the rest touching
    Classic,
    /// Strikers from both ends into a touching row
    OppositeEnds,
    /// Evenly spread, every other ball moving
    Alternating,
    /// Touching groups of three, each led by a mover
    Clusters,
    /// Everything moving, tightly spaced
    Packed,
}

impl LayoutPreset {
    pub const ALL: [Self; 5] = [
        Self::Classic,
        Self::OppositeEnds,
        Self::Alternating,
        Self::Clusters,
        Self::Packed,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::OppositeEnds => "opposite_ends",
            Self::Alternating => "alternating",
            Self::Clusters => "clusters",
            Self::Packed => "packed",
        }
    }

    /// `(spacing multiplier, speed multiplier)` of ball `index` out of `count`
    pub const fn slot(self, index: usize, count: usize) -> (f32, f32) {
        match self {
            Self::Classic => {
                if index == 0 {
                    (1.0, 1.0)
                } else {
                    (0.0, 0.0)
                }
            }
            Self::OppositeEnds => {
                if index == 0 {
                    (1.0, OPPOSITE_SPEEDS[0])
                } else if index + 2 == count {
                    (1.0, 0.0)
                } else if index + 1 == count {
                    (1.0, OPPOSITE_SPEEDS[1])
                } else {
                    (0.0, 0.0)
                }
            }
            Self::Alternating => {
                if index % 2 == 0 {
                    (1.0, ALTERNATING_SPEEDS[(index / 2) % ALTERNATING_SPEEDS.len()])
                } else {
                    (1.0, 0.0)
                }
            }
            Self::Clusters => {
                if index % CLUSTER_SIZE == 0 {
                    (1.0, CLUSTER_SPEEDS[(index / CLUSTER_SIZE) % CLUSTER_SPEEDS.len()])
                } else if index % CLUSTER_SIZE == CLUSTER_SIZE - 1 {
                    (1.0, 0.0)
                } else {
                    (0.0, 0.0)
                }
            }
            Self::Packed => (PACKED_SPACING, PACKED_SPEEDS[index % PACKED_SPEEDS.len()]),
        }
    }
}

/// Cradle settings
#[derive(Debug, Clone, Copy)]
pub struct CradleConfig {
    pub diameter: f32,
    /// Speed of a ball with speed multiplier 1
    pub initial_velocity: f32,
    /// Frames per cycle; 0 runs one cycle forever
    pub reset_interval: u32,
    /// Ball counts to choose from each cycle
    pub ball_counts: &'static [usize],
    /// Fixed boundary, or `None` to pick one per cycle
    pub boundary: Option<Boundary>,
    /// Fixed layout, or `None` to pick one per cycle
    pub layout: Option<LayoutPreset>,
    pub palette: HuePalette,
    pub transfer: ColorTransfer,
}

impl Default for CradleConfig {
    fn default() -> Self {
        Self {
            diameter: DEFAULT_DIAMETER,
            initial_velocity: DEFAULT_VELOCITY,
            reset_interval: DEFAULT_RESET_INTERVAL,
            ball_counts: DEFAULT_BALL_COUNTS,
            boundary: None,
            layout: None,
            palette: HuePalette::default(),
            transfer: ColorTransfer::Infect,
        }
    }
}

impl CradleConfig {
    #[must_use]
    pub const fn with_diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }

    #[must_use]
    pub const fn with_initial_velocity(mut self, velocity: f32) -> Self {
        self.initial_velocity = velocity;
        self
    }

    #[must_use]
    pub const fn with_reset_interval(mut self, frames: u32) -> Self {
        self.reset_interval = frames;
        self
    }

    #[must_use]
    pub const fn with_ball_counts(mut self, counts: &'static [usize]) -> Self {
        self.ball_counts = counts;
        self
    }

    #[must_use]
    pub const fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = Some(boundary);
        self
    }

    #[must_use]
    pub const fn with_layout(mut self, layout: LayoutPreset) -> Self {
        self.layout = Some(layout);
        self
    }

    #[must_use]
    pub const fn with_palette(mut self, palette: HuePalette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub const fn with_transfer(mut self, transfer: ColorTransfer) -> Self {
        self.transfer = transfer;
        self
    }
}

/// Newton's cradle effect
#[derive(Debug, Clone)]
pub struct CradleEffect {
    config: CradleConfig,
    track_len: usize,
    seed: u64,
    rng: Pcg32,
    balls: Vec<Ball, MAX_BALLS>,
    /// Explicit layout restored on every restart
    fixed_balls: Option<Vec<Ball, MAX_BALLS>>,
    boundary: Boundary,
    layout: LayoutPreset,
    cycle: PeriodicReset,
    collisions: usize,
}

impl CradleEffect {
    pub fn new(track_len: usize, seed: u64) -> Self {
        Self::with_config(track_len, seed, CradleConfig::default())
    }

    pub fn with_config(track_len: usize, seed: u64, config: CradleConfig) -> Self {
        let mut effect = Self {
            config,
            track_len,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            balls: Vec::new(),
            fixed_balls: None,
            boundary: config.boundary.unwrap_or_default(),
            layout: config.layout.unwrap_or(LayoutPreset::Classic),
            cycle: PeriodicReset::new(config.reset_interval),
            collisions: 0,
        };
        effect.start_cycle();
        effect
    }

    /// Cradle with an explicit ball layout
    ///
    /// The layout is used instead of a generated one and restored on every
    /// restart, which makes the simulation fully deterministic in
    /// [`ColorTransfer::Infect`] mode. Balls beyond [`MAX_BALLS`] are ignored.
    pub fn with_balls(
        track_len: usize,
        boundary: Boundary,
        balls: &[Ball],
        config: CradleConfig,
    ) -> Self {
        let mut fixed = Vec::new();
        for ball in balls {
            if fixed.push(*ball).is_err() {
                break;
            }
        }
        let config = config.with_boundary(boundary);

        let mut effect = Self {
            config,
            track_len,
            seed: 0,
            rng: Pcg32::seed_from_u64(0),
            balls: Vec::new(),
            fixed_balls: Some(fixed),
            boundary,
            layout: LayoutPreset::Classic,
            cycle: PeriodicReset::new(config.reset_interval),
            collisions: 0,
        };
        effect.start_cycle();
        effect
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub const fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub const fn layout(&self) -> LayoutPreset {
        self.layout
    }

    pub const fn config(&self) -> &CradleConfig {
        &self.config
    }

    /// Collisions resolved during the latest update
    pub const fn collisions(&self) -> usize {
        self.collisions
    }

    #[allow(clippy::cast_precision_loss)]
    fn resolver(&self) -> CollisionResolver {
        CollisionResolver::new(
            self.track_len as f32,
            self.boundary,
            self.config.transfer,
            self.config.palette,
        )
    }

    /// Most balls that fit between the walls side by side
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn max_fitting_balls(&self) -> usize {
        if self.config.diameter <= 0.0 {
            return MAX_BALLS;
        }
        ((self.track_len as f32 / self.config.diameter) as usize).min(MAX_BALLS)
    }

    fn start_cycle(&mut self) {
        self.collisions = 0;
        self.cycle.restart();

        if let Some(fixed) = &self.fixed_balls {
            self.balls = fixed.clone();
            return;
        }

        self.boundary = match self.config.boundary {
            Some(boundary) => boundary,
            None if self.rng.random_bool(0.5) => Boundary::Wall,
            None => Boundary::Wraparound,
        };
        self.layout = match self.config.layout {
            Some(layout) => layout,
            None => LayoutPreset::ALL[self.rng.random_range(0..LayoutPreset::ALL.len())],
        };

        let count = self.pick_ball_count();
        self.lay_out(count);

        #[cfg(feature = "esp32-log")]
        println!(
            "[CradleEffect.start_cycle] {} balls, layout {}, boundary {}",
            self.balls.len(),
            self.layout.as_str(),
            self.boundary.as_str()
        );
    }

    fn pick_ball_count(&mut self) -> usize {
        let counts = self.config.ball_counts;
        let wanted = if counts.is_empty() {
            DEFAULT_BALL_COUNTS[0]
        } else {
            counts[self.rng.random_range(0..counts.len())]
        };
        wanted.min(self.max_fitting_balls())
    }

    #[allow(clippy::cast_precision_loss)]
    fn lay_out(&mut self, count: usize) {
        self.balls.clear();
        if count == 0 {
            return;
        }

        let diameter = self.config.diameter;
        let len = self.track_len as f32;
        let margin = diameter;
        let base_spacing = if count > 1 {
            (len - 2.0 * margin) / (count - 1) as f32
        } else {
            0.0
        };
        let palette = self.config.palette;
        let infect = self.config.transfer == ColorTransfer::Infect;

        let mut position = margin;
        for index in 0..count {
            let (spacing, speed) = self.layout.slot(index, count);
            let moving = speed > 0.0;

            let velocity = if moving {
                let direction = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
                self.config.initial_velocity * speed * direction
            } else {
                0.0
            };

            let hue = palette.pick(&mut self.rng);
            let saturation = if infect && !moving {
                0.0
            } else {
                palette.saturation()
            };

            let ball = Ball::new(position, velocity, diameter).with_color(hue, saturation);
            if self.balls.push(ball).is_err() {
                break;
            }

            position += if spacing == 0.0 {
                diameter
            } else {
                base_spacing * spacing
            };
        }

        // Narrow spacings must not start the cycle overlapped.
        for index in 1..self.balls.len() {
            let floor = self.balls[index - 1].position + diameter;
            if self.balls[index].position < floor {
                self.balls[index].position = floor;
            }
        }

        // The margin plus touching runs can overshoot the far end; pull the
        // row back so every ball starts inside the walls.
        let mut ceiling = len;
        for ball in self.balls.iter_mut().rev() {
            let overshoot = ball.right_edge() - ceiling;
            if overshoot > 0.0 {
                ball.position -= overshoot;
            }
            ceiling = ball.left_edge();
        }

        if self.boundary == Boundary::Wraparound {
            for ball in &mut self.balls {
                ball.position = wrap(ball.position, len);
            }
        }
    }
}

impl Effect for CradleEffect {
    #[allow(clippy::cast_precision_loss)]
    fn update(&mut self, _frame: u64) {
        if self.cycle.tick() {
            self.start_cycle();
            return;
        }

        let len = self.track_len as f32;
        let boundary = self.boundary;
        for ball in &mut self.balls {
            advance_constant(
                &mut ball.position,
                &mut ball.velocity,
                ball.diameter,
                len,
                boundary,
            );
        }

        let resolver = self.resolver();
        self.collisions = resolver.resolve(&mut self.balls, &mut self.rng);
    }

    fn query(&self, index: usize, _frame: u64) -> Rgbf {
        if index >= self.track_len {
            return Rgbf::BLACK;
        }
        composite_additive(&self.balls, index)
    }

    fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.start_cycle();
    }
}
