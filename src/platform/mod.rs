//! Platform abstraction layer
//!
//! The collaborators a frame loop needs from the outside world:
//! - Input snapshots and the quit signal
//! - Frame pacing and the blocking delay used for the winner hold
//!
//! Drawing lives behind `renderer::Renderer`. `headless` implements all three
//! without a window.

use std::time::Duration;

use crate::sim::TickInput;

pub mod headless;

pub use headless::{LogRenderer, ScriptedInput, SystemClock, UnpacedClock};

/// Source of player input
pub trait InputSource {
    /// Keys held for the coming tick
    fn snapshot(&mut self) -> TickInput;

    /// Whether the loop should stop before the next tick
    fn quit_requested(&mut self) -> bool;
}

/// Loop pacing
pub trait Clock {
    /// Block until the next frame is due at `fps`
    fn tick(&mut self, fps: u32);

    /// Block for `duration`
    fn delay(&mut self, duration: Duration);
}
