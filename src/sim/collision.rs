//! Collision response for the ball
//!
//! Runs after the ball has moved for the tick. Walls flip the vertical
//! velocity; paddles flip the horizontal velocity and replace the vertical
//! velocity with a deflection that depends on where the ball struck.

use super::state::{Ball, Paddle, Side};

/// What the resolver changed this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    /// Ball bounced off the top or bottom wall
    pub wall_bounce: bool,
    /// Paddle that returned the ball, if any
    pub paddle_hit: Option<Side>,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self::default()
    }
}

/// Flip the vertical velocity when the ball touches the bottom or top wall.
///
/// Bottom is checked first; only one wall can register per call.
pub fn ball_wall_collision(ball: &mut Ball, court_height: f32) -> bool {
    if ball.pos.y + ball.radius >= court_height {
        ball.vel.y = -ball.vel.y;
        true
    } else if ball.pos.y - ball.radius <= 0.0 {
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Vertical velocity imparted by a paddle strike at `hit_y`.
///
/// Zero at the paddle centre, `max_velocity` in magnitude at either end.
/// Above centre gives a negative (upward) velocity.
#[inline]
pub fn deflection(paddle: &Paddle, hit_y: f32, max_velocity: f32) -> f32 {
    let diff = paddle.center_y() - hit_y;
    let reduction_factor = (paddle.height() / 2.0) / max_velocity;
    -(diff / reduction_factor)
}

/// Bounce the ball off whichever paddle it is travelling toward.
///
/// Only the left paddle is considered while the ball moves left and only the
/// right one otherwise. A ball outside the paddle's vertical span passes.
pub fn ball_paddle_collision(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    max_velocity: f32,
) -> Option<Side> {
    let (side, paddle) = if ball.vel.x < 0.0 {
        (Side::Left, left)
    } else {
        (Side::Right, right)
    };

    if !paddle.spans_y(ball.pos.y) {
        return None;
    }

    let touching = match side {
        Side::Left => ball.pos.x - ball.radius <= paddle.pos.x + paddle.width(),
        Side::Right => ball.pos.x + ball.radius >= paddle.pos.x,
    };
    if !touching {
        return None;
    }

    ball.vel.x = -ball.vel.x;
    ball.vel.y = deflection(paddle, ball.pos.y, max_velocity);
    Some(side)
}

/// Apply wall then paddle rules to a ball that has already moved this tick
pub fn resolve_collisions(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    court_height: f32,
    max_velocity: f32,
) -> CollisionResult {
    let wall_bounce = ball_wall_collision(ball, court_height);
    let paddle_hit = ball_paddle_collision(ball, left, right, max_velocity);
    CollisionResult {
        wall_bounce,
        paddle_hit,
    }
}
