//! Configuration errors
//!
//! The simulation itself is total; the only failures are bad settings, caught
//! before a match is built.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("Court {width}x{height} exceeds the largest supported extent")]
    CourtTooLarge { width: f32, height: f32 },

    #[error("Paddle height {paddle} does not fit in court height {court}")]
    PaddleTooTall { paddle: f32, court: f32 },

    #[error("Court width {court} cannot hold two paddles of width {paddle} with margin {margin}")]
    CourtTooNarrow { court: f32, paddle: f32, margin: f32 },

    #[error("Ball diameter {diameter} does not fit in court height {court}")]
    BallTooLarge { diameter: f32, court: f32 },

    #[error("Winning score must be at least 1")]
    ZeroWinningScore,

    #[error("Frame rate must be at least 1")]
    ZeroFps,

    #[error("Win hold of {0} seconds is not a usable duration")]
    InvalidHold(f32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
