//! Match settings
//!
//! Immutable configuration handed to a match at construction. Stored as JSON
//! next to the binary when the defaults need overriding.

use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Court geometry, entity sizes and match rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Court ===
    pub court_width: f32,
    pub court_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from a paddle to its side wall
    pub paddle_margin: f32,
    /// Vertical distance per tick
    pub paddle_velocity: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Horizontal ball speed and deflection cap
    pub max_velocity: f32,

    // === Rules ===
    pub winning_score: u32,

    // === Timing ===
    pub fps: u32,
    /// Winner announcement hold (seconds)
    pub win_hold_secs: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            court_width: COURT_WIDTH,
            court_height: COURT_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            paddle_velocity: PADDLE_VELOCITY,

            ball_radius: BALL_RADIUS,
            max_velocity: MAX_VELOCITY,

            winning_score: WINNING_SCORE,

            fps: FPS,
            win_hold_secs: WIN_HOLD_SECS,
        }
    }
}

impl Settings {
    /// Check every precondition the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("court_width", self.court_width),
            ("court_height", self.court_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_margin", self.paddle_margin),
            ("paddle_velocity", self.paddle_velocity),
            ("ball_radius", self.ball_radius),
            ("max_velocity", self.max_velocity),
            ("win_hold_secs", self.win_hold_secs),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        let positive = [
            ("court_width", self.court_width),
            ("court_height", self.court_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_velocity", self.paddle_velocity),
            ("ball_radius", self.ball_radius),
            ("max_velocity", self.max_velocity),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.paddle_margin < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "paddle_margin",
                value: self.paddle_margin,
            });
        }
        if self.court_width > MAX_COURT_EXTENT || self.court_height > MAX_COURT_EXTENT {
            return Err(ConfigError::CourtTooLarge {
                width: self.court_width,
                height: self.court_height,
            });
        }
        if self.paddle_height > self.court_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                court: self.court_height,
            });
        }
        if 2.0 * (self.paddle_margin + self.paddle_width) >= self.court_width {
            return Err(ConfigError::CourtTooNarrow {
                court: self.court_width,
                paddle: self.paddle_width,
                margin: self.paddle_margin,
            });
        }
        if 2.0 * self.ball_radius >= self.court_height {
            return Err(ConfigError::BallTooLarge {
                diameter: 2.0 * self.ball_radius,
                court: self.court_height,
            });
        }
        if self.winning_score == 0 {
            return Err(ConfigError::ZeroWinningScore);
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        if Duration::try_from_secs_f32(self.win_hold_secs).is_err() {
            return Err(ConfigError::InvalidHold(self.win_hold_secs));
        }
        Ok(())
    }

    /// Centre of the court, where the ball serves from
    pub fn court_center(&self) -> Vec2 {
        Vec2::new(self.court_width / 2.0, self.court_height / 2.0)
    }

    /// Top-left corner of the left paddle at the start of a match
    pub fn left_paddle_start(&self) -> Vec2 {
        Vec2::new(self.paddle_margin, self.paddle_start_y())
    }

    /// Top-left corner of the right paddle at the start of a match
    pub fn right_paddle_start(&self) -> Vec2 {
        Vec2::new(
            self.court_width - self.paddle_margin - self.paddle_width,
            self.paddle_start_y(),
        )
    }

    fn paddle_start_y(&self) -> f32 {
        self.court_height / 2.0 - self.paddle_height / 2.0
    }

    /// Winner announcement hold
    pub fn win_hold(&self) -> Duration {
        Duration::try_from_secs_f32(self.win_hold_secs).unwrap_or_default()
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
