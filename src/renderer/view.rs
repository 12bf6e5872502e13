//! Read-only snapshot of what a frame should show

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GameState, Side};

/// Axis-aligned rectangle, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

/// Circle by centre and radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

/// Everything a drawing backend needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderView {
    pub court: Vec2,
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball: Circle,
    pub left_score: u32,
    pub right_score: u32,
    /// Winner text, only while a match is won
    pub announcement: Option<String>,
}

impl RenderView {
    pub fn capture(state: &GameState) -> Self {
        let paddle_rect = |side: Side| {
            let paddle = state.paddle(side);
            Rect {
                pos: paddle.pos,
                size: paddle.size,
            }
        };

        Self {
            court: Vec2::new(state.settings.court_width, state.settings.court_height),
            left_paddle: paddle_rect(Side::Left),
            right_paddle: paddle_rect(Side::Right),
            ball: Circle {
                center: state.ball.pos,
                radius: state.ball.radius,
            },
            left_score: state.score.left,
            right_score: state.score.right,
            announcement: state.winner().map(announcement),
        }
    }
}

/// Text shown when `winner` takes the match
pub fn announcement(winner: Side) -> String {
    format!("{} Player Won!", winner.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::GamePhase;

    #[test]
    fn test_capture_new_match() {
        let state = GameState::new(Settings::default()).unwrap();
        let view = RenderView::capture(&state);

        assert_eq!(view.court, Vec2::new(700.0, 500.0));
        assert_eq!(
            view.left_paddle,
            Rect {
                pos: Vec2::new(10.0, 200.0),
                size: Vec2::new(20.0, 100.0),
            }
        );
        assert_eq!(view.right_paddle.pos, Vec2::new(670.0, 200.0));
        assert_eq!(view.ball.center, Vec2::new(350.0, 250.0));
        assert_eq!(view.ball.radius, 7.0);
        assert_eq!((view.left_score, view.right_score), (0, 0));
        assert_eq!(view.announcement, None);
    }

    #[test]
    fn test_capture_announces_winner() {
        let mut state = GameState::new(Settings::default()).unwrap();
        state.score.right = 10;
        state.phase = GamePhase::RoundWon(Side::Right);

        let view = RenderView::capture(&state);
        assert_eq!(view.right_score, 10);
        assert_eq!(view.announcement.as_deref(), Some("Right Player Won!"));
    }
}
