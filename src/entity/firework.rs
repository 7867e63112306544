//! Firework shaft and its burst particles
//!
//! A firework climbs from the start of the track, slowing down as it goes.
//! Once past its explosion height it bursts (with some per-frame luck) into a
//! cloud of particles whose positions follow logarithmic drag from the burst
//! origin.

use heapless::Vec;
use rand::Rng;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{FIREWORK_PALETTES, FireworkPalette, Rgb};
use crate::compositor::PixelBuffer;
use crate::simulation::{advance_ballistic, drag_displacement};

/// Frames a particle stays at full brightness before it starts fading
pub const IGNITION_DELAY: u64 = 40;
/// Particle capacity of a single firework
pub const MAX_PARTICLES: usize = 80;
/// Falloff exponent of the launch trail
pub const TRAIL_EXPONENT: f32 = 2.5;

const PARTICLE_FADE_EXPONENT: f32 = 1.5;
const BURST_CHANCE: f64 = 0.15;
/// Shafts slower than this fizzle out without bursting
const MIN_LAUNCH_SPEED: f32 = 0.1;

/// One burst fragment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Burst position
    pub origin: f32,
    /// Signed launch speed; the sign is the direction
    pub speed: f32,
    /// Frames of fading after the ignition delay
    pub life: f32,
    pub color: Rgb,
}

impl Particle {
    pub const fn new(origin: f32, speed: f32, life: f32, color: Rgb) -> Self {
        Self {
            origin,
            speed,
            life,
            color,
        }
    }

    /// Position `age` frames after the burst
    pub fn position(&self, age: u64) -> f32 {
        self.origin + drag_displacement(self.speed, age)
    }

    /// Pixel the particle lights `age` frames after the burst
    #[allow(clippy::cast_possible_truncation)]
    pub fn pixel(&self, age: u64) -> i64 {
        libm::roundf(self.position(age)) as i64
    }

    /// Brightness at `age`, or `None` once the particle has burnt out
    #[allow(clippy::cast_precision_loss)]
    pub fn brightness(&self, age: u64) -> Option<f32> {
        let fading = age as f32 - IGNITION_DELAY as f32;
        if fading >= self.life || self.life <= 0.0 {
            return None;
        }
        if fading < 0.0 {
            return Some(1.0);
        }
        let remaining = (self.life - fading) / self.life;
        Some(libm::powf(remaining, PARTICLE_FADE_EXPONENT))
    }

    #[allow(clippy::cast_possible_wrap)]
    pub fn is_visible(&self, age: u64, track_len: usize) -> bool {
        let pixel = self.pixel(age);
        (0..track_len as i64).contains(&pixel) && self.brightness(age).is_some()
    }
}

/// Firework lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireworkState {
    Launching,
    Bursting { start_frame: u64 },
    /// Nothing left to draw; removed by the effect
    Spent,
}

/// Firework shaft and, once burst, its particles
#[derive(Debug, Clone)]
pub struct Firework {
    state: FireworkState,
    position: f32,
    speed: f32,
    decay: f32,
    /// Trail length in pixels
    width: usize,
    palette: &'static FireworkPalette,
    max_particle_speed: f32,
    particle_count: usize,
    /// Fraction of the track after which the shaft may burst
    explosion_threshold: f32,
    particles: Vec<Particle, MAX_PARTICLES>,
}

impl Firework {
    /// Launch a new firework from the start of a track of `track_len` pixels
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn launch<R: Rng + ?Sized>(rng: &mut R, track_len: usize) -> Self {
        let len = track_len as f32;
        let speed = (len / 70.0) * rng.random_range(0.8..1.8_f32);
        let decay = rng.random_range(0.95..0.99_f32);
        let width = (libm::roundf(len / rng.random_range(8.0..12.0_f32)) as usize).max(1);
        let palette = &FIREWORK_PALETTES[rng.random_range(0..FIREWORK_PALETTES.len())];
        let max_particle_speed = len / rng.random_range(4.0..9.0_f32);

        let min_count = libm::roundf(len / 10.0) as usize;
        let max_count = (libm::roundf(len / 4.0) as usize).max(min_count);
        let particle_count = rng
            .random_range(min_count..=max_count)
            .clamp(1, MAX_PARTICLES);

        Self {
            state: FireworkState::Launching,
            position: 0.0,
            speed,
            decay,
            width,
            palette,
            max_particle_speed,
            particle_count,
            explosion_threshold: rng.random_range(0.35..0.85_f32),
            particles: Vec::new(),
        }
    }

    pub const fn state(&self) -> FireworkState {
        self.state
    }

    pub const fn position(&self) -> f32 {
        self.position
    }

    pub const fn speed(&self) -> f32 {
        self.speed
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles the burst will produce
    pub const fn particle_count(&self) -> usize {
        self.particle_count
    }

    pub const fn is_spent(&self) -> bool {
        matches!(self.state, FireworkState::Spent)
    }

    /// Frames since the burst, if bursting
    pub const fn burst_age(&self, frame: u64) -> Option<u64> {
        match self.state {
            FireworkState::Bursting { start_frame } => Some(frame.saturating_sub(start_frame)),
            _ => None,
        }
    }

    /// Advance one frame
    #[allow(clippy::cast_precision_loss)]
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, frame: u64, track_len: usize) {
        let len = track_len as f32;
        match self.state {
            FireworkState::Launching => {
                let height = if len > 0.0 { self.position / len } else { 1.0 };
                if height > self.explosion_threshold
                    && self.speed > 0.0
                    && rng.random_bool(BURST_CHANCE)
                {
                    self.burst(rng, frame);
                    return;
                }

                advance_ballistic(&mut self.position, &mut self.speed, self.decay);
                if self.position > len || self.speed < MIN_LAUNCH_SPEED {
                    self.state = FireworkState::Spent;
                }
            }
            FireworkState::Bursting { start_frame } => {
                let age = frame.saturating_sub(start_frame);
                if !self.particles.iter().any(|p| p.is_visible(age, track_len)) {
                    self.state = FireworkState::Spent;
                }
            }
            FireworkState::Spent => {}
        }
    }

    fn burst<R: Rng + ?Sized>(&mut self, rng: &mut R, frame: u64) {
        let origin = self.position;
        let max_speed = self.max_particle_speed;
        let palette = self.palette;
        let particles = (0..self.particle_count).map(|_| {
            let speed = (rng.random::<f32>() - 0.5) * max_speed * rng.random_range(0.6..1.4_f32);
            let life = rng.random_range(30.0..130.0_f32);
            Particle::new(origin, speed, life, palette.pick_particle(&mut *rng))
        });
        self.ignite(frame, particles);
    }

    /// Switch to the bursting state at `frame` with the given particles
    ///
    /// Particles beyond [`MAX_PARTICLES`] are dropped.
    pub fn ignite(&mut self, frame: u64, particles: impl IntoIterator<Item = Particle>) {
        self.particles.clear();
        for particle in particles {
            if self.particles.push(particle).is_err() {
                break;
            }
        }
        self.particle_count = self.particles.len();
        self.state = FireworkState::Bursting { start_frame: frame };

        #[cfg(feature = "esp32-log")]
        println!(
            "[Firework.ignite] burst of {} particles at {}",
            self.particles.len(),
            self.position
        );
    }

    /// Draw the trail or the particles into the frame buffer
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn draw<const N: usize>(&self, frame: u64, buffer: &mut PixelBuffer<N>) {
        match self.state {
            FireworkState::Launching => {
                let width = self.width as f32;
                for i in 0..self.width {
                    let pixel = libm::roundf(self.position - width / 2.0 + i as f32) as i64;
                    let brightness = libm::powf((i as f32 + 1.0) / width, TRAIL_EXPONENT);
                    buffer.claim_brighter(pixel, brightness, self.palette.trail);
                }
            }
            FireworkState::Bursting { start_frame } => {
                let age = frame.saturating_sub(start_frame);
                for particle in &self.particles {
                    if let Some(brightness) = particle.brightness(age) {
                        buffer.accumulate(particle.pixel(age), brightness, particle.color);
                    }
                }
            }
            FireworkState::Spent => {}
        }
    }
}
