#![no_std]

pub mod bounds;
pub mod collision;
pub mod color;
pub mod compositor;
pub mod effect;
pub mod entity;
pub mod filter;
pub mod frame_scheduler;
pub mod lifecycle;
pub mod math8;
pub mod noise;
pub mod renderer;
pub mod simulation;
pub mod transition;

pub use bounds::RenderingBounds;
pub use collision::{CollisionResolver, ColorTransfer};
pub use effect::{Effect, EffectId, EffectSlot};
pub use filter::BrightnessRange;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use lifecycle::{CapacityError, Population};
pub use renderer::{EngineConfig, Renderer, TransitionTimings};
pub use simulation::Boundary;

pub use color::{HuePalette, Hsv, Rgb, Rgbf};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
