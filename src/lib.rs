//! Classic Pong - two paddles, one ball, first to ten
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, match state machine)
//! - `renderer`: Read-only render view handed to a drawing backend
//! - `platform`: Input, pacing and quit collaborators plus a headless implementation
//! - `runner`: The frame loop tying the simulation to a platform
//! - `settings`: Immutable match configuration

pub mod error;
pub mod platform;
pub mod renderer;
pub mod runner;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use runner::{RunSummary, Runner};
pub use settings::Settings;

/// Reference configuration values
pub mod consts {
    /// Court dimensions
    pub const COURT_WIDTH: f32 = 700.0;
    pub const COURT_HEIGHT: f32 = 500.0;
    /// Beyond this, per-tick steps start losing f32 precision
    pub const MAX_COURT_EXTENT: f32 = 1_000_000.0;

    /// Target loop rate
    pub const FPS: u32 = 60;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its side of the court
    pub const PADDLE_MARGIN: f32 = 10.0;
    /// Vertical distance a paddle covers per tick
    pub const PADDLE_VELOCITY: f32 = 4.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 7.0;
    /// Horizontal speed of the ball, and the cap on paddle deflection
    pub const MAX_VELOCITY: f32 = 5.0;

    /// Points needed to take the match
    pub const WINNING_SCORE: u32 = 10;
    /// How long the winner announcement stays on screen (seconds)
    pub const WIN_HOLD_SECS: f32 = 5.0;
}
