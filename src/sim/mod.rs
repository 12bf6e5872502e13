//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - No rendering or platform dependencies
//! - The match state owns every entity; collision code only borrows them

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{
    CollisionResult, ball_paddle_collision, ball_wall_collision, deflection, resolve_collisions,
};
pub use state::{Ball, Direction, GameEvent, GamePhase, GameState, Paddle, Score, Side};
pub use tick::{TickInput, tick};
