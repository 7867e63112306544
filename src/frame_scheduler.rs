//! Wall-clock pacing for the frame-stepped renderer.
//!
//! Effects only ever see frame numbers. This module maps them onto real time:
//! the caller passes the current [`Instant`] and sleeps for the returned
//! duration, using whatever timer the platform offers.

use embassy_time::{Duration, Instant};

use crate::{OutputDriver, Renderer};

/// Default target frame rate
pub const DEFAULT_FPS: u32 = 60;

/// Frame length at [`DEFAULT_FPS`]
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / DEFAULT_FPS as u64);

/// Frames of lag tolerated before the schedule is re-anchored to `now`
const MAX_LAG_FRAMES: u32 = 2;

/// Timing outcome of one scheduler tick
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// When the next frame is due
    pub next_deadline: Instant,
    /// Time left until `next_deadline`, zero when running late
    pub sleep_duration: Duration,
    /// The scheduler fell too far behind and skipped the missed frames
    pub dropped_backlog: bool,
}

/// Renders frames at a fixed rate and pushes them to an output driver
///
/// A late tick keeps the original schedule so the next sleep is shorter. Once
/// the lag exceeds two frames the backlog is dropped rather than rendered in
/// a burst.
///
/// ```ignore
/// let mut scheduler = FrameScheduler::with_fps(renderer, driver, 60);
/// loop {
///     let result = scheduler.tick(Instant::now());
///     Timer::after(result.sleep_duration).await;
/// }
/// ```
pub struct FrameScheduler<O: OutputDriver, const MAX_LEDS: usize> {
    output: O,
    renderer: Renderer<MAX_LEDS>,
    next_frame: Option<Instant>,
    frame_duration: Duration,
}

impl<O: OutputDriver, const MAX_LEDS: usize> FrameScheduler<O, MAX_LEDS> {
    pub fn new(renderer: Renderer<MAX_LEDS>, driver: O) -> Self {
        Self::with_frame_duration(renderer, driver, DEFAULT_FRAME_DURATION)
    }

    pub fn with_frame_duration(
        renderer: Renderer<MAX_LEDS>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            renderer,
            next_frame: None,
            frame_duration,
        }
    }

    /// Scheduler running at `fps` frames per second; 0 selects [`DEFAULT_FPS`]
    pub fn with_fps(renderer: Renderer<MAX_LEDS>, driver: O, fps: u32) -> Self {
        let frame_duration = match fps {
            0 => DEFAULT_FRAME_DURATION,
            fps => Duration::from_micros(1_000_000 / u64::from(fps)),
        };
        Self::with_frame_duration(renderer, driver, frame_duration)
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Render one frame, write it out and report when the next one is due
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let (deadline, dropped_backlog) = self.anchor(now);

        let frame = self.renderer.render();
        self.output.write(frame);

        let next_deadline = deadline + self.frame_duration;
        self.next_frame = Some(next_deadline);

        FrameResult {
            next_deadline,
            sleep_duration: next_deadline
                .checked_duration_since(now)
                .unwrap_or(Duration::from_ticks(0)),
            dropped_backlog,
        }
    }

    /// Deadline of the frame being rendered at `now`
    fn anchor(&self, now: Instant) -> (Instant, bool) {
        let Some(scheduled) = self.next_frame else {
            return (now, false);
        };
        if now > scheduled + self.frame_duration * MAX_LAG_FRAMES {
            (now, true)
        } else {
            (scheduled, false)
        }
    }

    pub fn renderer(&self) -> &Renderer<MAX_LEDS> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer<MAX_LEDS> {
        &mut self.renderer
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
