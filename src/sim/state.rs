//! Game state and core simulation types
//!
//! The match owns both paddles, the ball and the score. Everything here is
//! plain data plus the entity-level mutations; the per-tick orchestration
//! lives in `tick`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::settings::Settings;

/// Which half of the court a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Rally in progress
    Playing,
    /// A side reached the winning score; waiting for the announcement hold
    RoundWon(Side),
}

/// Vertical paddle direction (screen space, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A player's paddle, anchored at its top-left corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Distance covered per move
    pub speed: f32,
    origin: Vec2,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            pos,
            size,
            speed,
            origin: pos,
        }
    }

    /// Move one step. Callers are responsible for keeping the paddle on court.
    pub fn move_toward(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.pos.y -= self.speed,
            Direction::Down => self.pos.y += self.speed,
        }
    }

    pub fn reset(&mut self) {
        self.pos = self.origin;
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Whether a y coordinate lies within the paddle's vertical span (inclusive)
    #[inline]
    pub fn spans_y(&self, y: f32) -> bool {
        self.top() <= y && y <= self.bottom()
    }
}

/// The ball, positioned by its centre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    origin: Vec2,
}

impl Ball {
    /// Ball at `pos` travelling horizontally toward the right at `speed`
    pub fn new(pos: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel: Vec2::new(speed, 0.0),
            radius,
            origin: pos,
        }
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Back to the serve spot, heading the other way with no vertical speed
    pub fn reset(&mut self) {
        self.pos = self.origin;
        self.vel.x = -self.vel.x;
        self.vel.y = 0.0;
    }
}

/// Points for both sides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Side that has reached `winning_score`, left checked first
    pub fn winner(&self, winning_score: u32) -> Option<Side> {
        if self.left >= winning_score {
            Some(Side::Left)
        } else if self.right >= winning_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball was returned by a paddle
    PaddleHit(Side),
    /// Ball left the court; `score` is the tally after the point
    PointScored { scorer: Side, score: Score },
    /// A side reached the winning score
    MatchWon(Side),
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Configuration the match was built with
    pub settings: Settings,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Build a fresh match, rejecting settings the simulation cannot run with
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;

        let paddle_size = Vec2::new(settings.paddle_width, settings.paddle_height);
        let left_paddle = Paddle::new(
            settings.left_paddle_start(),
            paddle_size,
            settings.paddle_velocity,
        );
        let right_paddle = Paddle::new(
            settings.right_paddle_start(),
            paddle_size,
            settings.paddle_velocity,
        );
        let ball = Ball::new(
            settings.court_center(),
            settings.ball_radius,
            settings.max_velocity,
        );

        Ok(Self {
            settings,
            left_paddle,
            right_paddle,
            ball,
            score: Score::new(),
            phase: GamePhase::Playing,
            time_ticks: 0,
        })
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            GamePhase::RoundWon(side) => Some(side),
            GamePhase::Playing => None,
        }
    }

    /// Full reset after a win: serve, paddles and score go back to the start
    pub fn start_new_match(&mut self) {
        self.ball.reset();
        self.left_paddle.reset();
        self.right_paddle.reset();
        self.score.reset();
        self.phase = GamePhase::Playing;
        log::info!("New match started");
    }
}
