//! Entity populations and the timing rules that grow and restart them.
//!
//! Effects own a [`Population`] of one entity kind. Spawning is
//! probabilistic and limited by a cap; expired entities are culled in place.

use heapless::Vec;
use rand::Rng;

/// Error returned when a population has no room for another entity.
///
/// Carries the rejected entity back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError<T>(pub T);

/// Bounded set of live entities
///
/// `CAP` is the storage capacity, `limit` the active cap of this instance
/// (never above `CAP`).
#[derive(Debug, Clone)]
pub struct Population<E, const CAP: usize> {
    entities: Vec<E, CAP>,
    limit: usize,
}

impl<E, const CAP: usize> Population<E, CAP> {
    pub const fn new(limit: usize) -> Self {
        Self {
            entities: Vec::new(),
            limit: if limit < CAP { limit } else { CAP },
        }
    }

    pub const fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Room for at least one more entity
    pub fn has_headroom(&self) -> bool {
        self.entities.len() < self.limit
    }

    /// Add an entity, handing it back if the population is full
    pub fn spawn(&mut self, entity: E) -> Result<(), CapacityError<E>> {
        if !self.has_headroom() {
            return Err(CapacityError(entity));
        }
        self.entities.push(entity).map_err(CapacityError)
    }

    /// Build and add an entity when there is room
    ///
    /// `make` is only called with headroom available; it may decline by
    /// returning `None`. Returns whether an entity was added.
    pub fn spawn_with(&mut self, make: impl FnOnce() -> Option<E>) -> bool {
        if !self.has_headroom() {
            return false;
        }
        match make() {
            Some(entity) => self.entities.push(entity).is_ok(),
            None => false,
        }
    }

    /// Remove every entity for which `expired` holds
    ///
    /// Returns the number of removed entities.
    pub fn cull(&mut self, mut expired: impl FnMut(&E) -> bool) -> usize {
        let before = self.entities.len();
        self.entities.retain(|entity| !expired(entity));
        before - self.entities.len()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, E> {
        self.entities.iter_mut()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.entities
    }
}

impl<E, const CAP: usize> Default for Population<E, CAP> {
    fn default() -> Self {
        Self::new(CAP)
    }
}

/// Per-frame Bernoulli trial; probabilities outside `[0, 1]` are clamped
pub fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f32) -> bool {
    if probability.is_nan() || probability <= 0.0 {
        return false;
    }
    rng.random_bool(f64::from(probability.min(1.0)))
}

/// Randomized minimum spacing between launches
///
/// A launch is allowed once more than `gap` frames have passed since the
/// previous one. A new gap is drawn at every launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchGate {
    min_gap: u32,
    max_gap: u32,
    gap: u32,
    last_launch: u64,
}

impl LaunchGate {
    /// Gate counting from frame 0 with an initial gap of `min_gap`
    pub const fn new(min_gap: u32, max_gap: u32) -> Self {
        let max_gap = if max_gap < min_gap { min_gap } else { max_gap };
        Self {
            min_gap,
            max_gap,
            gap: min_gap,
            last_launch: 0,
        }
    }

    /// Gate counting from frame 0 with a random initial gap
    pub fn with_random_gap<R: Rng + ?Sized>(min_gap: u32, max_gap: u32, rng: &mut R) -> Self {
        let mut gate = Self::new(min_gap, max_gap);
        gate.gap = gate.draw_gap(rng);
        gate
    }

    pub const fn gap(&self) -> u32 {
        self.gap
    }

    pub const fn last_launch(&self) -> u64 {
        self.last_launch
    }

    pub const fn is_open(&self, frame: u64) -> bool {
        frame.saturating_sub(self.last_launch) > self.gap as u64
    }

    /// Remember a launch at `frame` and draw the next gap
    pub fn record_launch<R: Rng + ?Sized>(&mut self, frame: u64, rng: &mut R) {
        self.last_launch = frame;
        self.gap = self.draw_gap(rng);
    }

    /// Count from frame 0 again with a freshly drawn gap
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.last_launch = 0;
        self.gap = self.draw_gap(rng);
    }

    fn draw_gap<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.random_range(self.min_gap..=self.max_gap)
    }
}

/// Bulk restart every `interval` frames; an interval of 0 never fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicReset {
    interval: u32,
    elapsed: u32,
}

impl PeriodicReset {
    pub const fn new(interval: u32) -> Self {
        Self {
            interval,
            elapsed: 0,
        }
    }

    pub const fn interval(&self) -> u32 {
        self.interval
    }

    /// Frames counted since the last restart
    pub const fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Count one frame; returns `true` when the restart is due
    ///
    /// A cycle gets `interval` ordinary frames and the restart takes the
    /// frame after them. The counter starts over after firing.
    pub fn tick(&mut self) -> bool {
        if self.interval == 0 {
            return false;
        }
        if self.elapsed >= self.interval {
            self.elapsed = 0;
            return true;
        }
        self.elapsed += 1;
        false
    }

    pub fn restart(&mut self) {
        self.elapsed = 0;
    }
}
