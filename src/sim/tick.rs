//! Fixed timestep simulation tick
//!
//! One call advances the match by one frame: steer paddles, move the ball,
//! resolve collisions, award points, check for a winner.

use serde::{Deserialize, Serialize};

use super::collision::resolve_collisions;
use super::state::{Direction, GameEvent, GamePhase, GameState, Paddle, Side};

/// Held keys for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

impl TickInput {
    /// Up/down pair for one side
    pub fn for_side(&self, side: Side) -> (bool, bool) {
        match side {
            Side::Left => (self.left_up, self.left_down),
            Side::Right => (self.right_up, self.right_down),
        }
    }
}

/// Move a paddle for held keys, refusing steps that would leave the court.
///
/// Up and down are evaluated one after the other, not as alternatives.
fn steer_paddle(paddle: &mut Paddle, up: bool, down: bool, court_height: f32) {
    if up && paddle.pos.y - paddle.speed >= 0.0 {
        paddle.move_toward(Direction::Up);
    }
    if down && paddle.pos.y + paddle.speed + paddle.height() <= court_height {
        paddle.move_toward(Direction::Down);
    }
}

/// Advance the match by one tick, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Frozen until the runner starts the next match
    if let GamePhase::RoundWon(_) = state.phase {
        return events;
    }

    state.time_ticks += 1;

    let court_width = state.settings.court_width;
    let court_height = state.settings.court_height;

    let (up, down) = input.for_side(Side::Left);
    steer_paddle(&mut state.left_paddle, up, down, court_height);
    let (up, down) = input.for_side(Side::Right);
    steer_paddle(&mut state.right_paddle, up, down, court_height);

    state.ball.advance();

    let collision = resolve_collisions(
        &mut state.ball,
        &state.left_paddle,
        &state.right_paddle,
        court_height,
        state.settings.max_velocity,
    );
    if collision.wall_bounce {
        log::debug!("Wall bounce at tick {}", state.time_ticks);
        events.push(GameEvent::WallBounce);
    }
    if let Some(side) = collision.paddle_hit {
        log::debug!(
            "{} paddle hit, ball velocity now ({:.2}, {:.2})",
            side.as_str(),
            state.ball.vel.x,
            state.ball.vel.y
        );
        events.push(GameEvent::PaddleHit(side));
    }

    // Ball out past a side wall scores for the opposite player
    let scorer = if state.ball.pos.x < 0.0 {
        Some(Side::Right)
    } else if state.ball.pos.x > court_width {
        Some(Side::Left)
    } else {
        None
    };
    if let Some(scorer) = scorer {
        state.score.increment(scorer);
        state.ball.reset();
        log::info!(
            "{} scores: {} - {}",
            scorer.as_str(),
            state.score.left,
            state.score.right
        );
        events.push(GameEvent::PointScored {
            scorer,
            score: state.score,
        });
    }

    if let Some(winner) = state.score.winner(state.settings.winning_score) {
        state.phase = GamePhase::RoundWon(winner);
        log::info!(
            "{} player wins the match {} - {}",
            winner.as_str(),
            state.score.left,
            state.score.right
        );
        events.push(GameEvent::MatchWon(winner));
    }

    events
}
