//! Frame loop
//!
//! Drives a `GameState` with a platform: pace, check quit, read input, tick,
//! draw. A won match holds the announcement on screen for the configured time
//! with nothing else processed, then a new match begins.

use crate::platform::{Clock, InputSource};
use crate::renderer::{RenderView, Renderer};
use crate::sim::{GameEvent, GameState, tick};

/// Whether the loop should keep going after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// What a finished run did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub matches_completed: u32,
}

pub struct Runner<I, R, C> {
    pub state: GameState,
    input: I,
    renderer: R,
    clock: C,
    summary: RunSummary,
}

impl<I: InputSource, R: Renderer, C: Clock> Runner<I, R, C> {
    pub fn new(state: GameState, input: I, renderer: R, clock: C) -> Self {
        Self {
            state,
            input,
            renderer,
            clock,
            summary: RunSummary::default(),
        }
    }

    /// One loop iteration
    pub fn frame(&mut self) -> LoopControl {
        self.clock.tick(self.state.settings.fps);

        if self.input.quit_requested() {
            return LoopControl::Quit;
        }

        let input = self.input.snapshot();
        let events = tick(&mut self.state, &input);
        self.summary.ticks += 1;

        self.renderer.draw(&RenderView::capture(&self.state));

        if events.iter().any(|e| matches!(e, GameEvent::MatchWon(_))) {
            // Input, quit and drawing are all frozen for the hold
            self.clock.delay(self.state.settings.win_hold());
            self.state.start_new_match();
            self.summary.matches_completed += 1;
        }

        LoopControl::Continue
    }

    /// Run until the input source asks to quit
    pub fn run(&mut self) -> RunSummary {
        log::info!(
            "Starting loop at {} fps on a {}x{} court",
            self.state.settings.fps,
            self.state.settings.court_width,
            self.state.settings.court_height
        );
        while self.frame() == LoopControl::Continue {}
        log::info!(
            "Loop stopped after {} ticks, {} matches completed",
            self.summary.ticks,
            self.summary.matches_completed
        );
        self.summary
    }

    /// Hand back the collaborators
    pub fn into_parts(self) -> (GameState, I, R, C) {
        (self.state, self.input, self.renderer, self.clock)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use glam::Vec2;

    use super::*;
    use crate::platform::{LogRenderer, ScriptedInput, UnpacedClock};
    use crate::settings::Settings;
    use crate::sim::{GamePhase, Score};

    /// Keeps every frame it was given
    #[derive(Default)]
    struct RecordingRenderer {
        views: Vec<RenderView>,
    }

    impl Renderer for RecordingRenderer {
        fn draw(&mut self, view: &RenderView) {
            self.views.push(view.clone());
        }
    }

    fn new_state() -> GameState {
        GameState::new(Settings::default()).unwrap()
    }

    #[test]
    fn test_quit_checked_before_tick() {
        let mut runner = Runner::new(
            new_state(),
            ScriptedInput::idle().with_max_ticks(0),
            LogRenderer::new(),
            UnpacedClock::new(),
        );
        let summary = runner.run();
        assert_eq!(summary, RunSummary::default());
        assert_eq!(runner.state.time_ticks, 0);
    }

    #[test]
    fn test_runs_requested_ticks() {
        let mut runner = Runner::new(
            new_state(),
            ScriptedInput::idle().with_max_ticks(30),
            RecordingRenderer::default(),
            UnpacedClock::new(),
        );
        let summary = runner.run();
        assert_eq!(summary.ticks, 30);

        let (state, _, renderer, clock) = runner.into_parts();
        assert_eq!(state.time_ticks, 30);
        assert_eq!(renderer.views.len(), 30);
        // One extra pace before the quit check
        assert_eq!(clock.frames, 31);
        assert!(clock.delays.is_empty());
        assert_eq!(
            renderer.views.last().map(|v| v.ball.center),
            Some(Vec2::new(500.0, 250.0))
        );
    }

    #[test]
    fn test_win_holds_then_resets() {
        let mut state = new_state();
        state.score = Score { left: 9, right: 3 };
        state.ball.pos = Vec2::new(698.0, 50.0);

        let mut runner = Runner::new(
            state,
            ScriptedInput::idle().with_max_ticks(1),
            RecordingRenderer::default(),
            UnpacedClock::new(),
        );
        let summary = runner.run();
        assert_eq!(summary.matches_completed, 1);

        let (state, _, renderer, clock) = runner.into_parts();

        // The winning frame carries the announcement
        assert_eq!(renderer.views.len(), 1);
        assert_eq!(renderer.views[0].left_score, 10);
        assert_eq!(
            renderer.views[0].announcement.as_deref(),
            Some("Left Player Won!")
        );

        assert_eq!(clock.delays, vec![Duration::from_secs(5)]);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, Score::new());
        assert_eq!(state.ball.pos, Vec2::new(350.0, 250.0));
    }

    #[test]
    fn test_full_match_with_scripted_input() {
        // Left paddle parked at the top lets every serve through; the second
        // point lands on tick 394
        let settings = Settings {
            winning_score: 2,
            ..Default::default()
        };
        let script = vec![
            crate::sim::TickInput {
                left_up: true,
                ..Default::default()
            };
            60
        ];
        let mut runner = Runner::new(
            GameState::new(settings).unwrap(),
            ScriptedInput::new(script).with_max_ticks(2000),
            LogRenderer::new(),
            UnpacedClock::new(),
        );
        let summary = runner.run();
        assert_eq!(
            summary,
            RunSummary {
                ticks: 2000,
                matches_completed: 1
            }
        );

        let (state, _, _, clock) = runner.into_parts();
        assert_eq!(clock.delays, vec![Duration::from_secs(5)]);
        // The fresh match has the left paddle idle in its serve slot, so nothing
        // has scored since
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, Score::new());
        assert_eq!(state.left_paddle.pos, Vec2::new(10.0, 200.0));
        assert_eq!(state.ball.pos, Vec2::new(190.0, 250.0));
    }

    #[test]
    fn test_match_won_on_final_tick() {
        let settings = Settings {
            winning_score: 2,
            ..Default::default()
        };
        let script = vec![
            crate::sim::TickInput {
                left_up: true,
                ..Default::default()
            };
            60
        ];
        let mut runner = Runner::new(
            GameState::new(settings).unwrap(),
            ScriptedInput::new(script).with_max_ticks(394),
            RecordingRenderer::default(),
            UnpacedClock::new(),
        );
        assert_eq!(runner.run().matches_completed, 1);

        let (_, _, renderer, _) = runner.into_parts();
        let views = renderer.views;
        assert_eq!(views.len(), 394);
        let last = &views[393];
        assert_eq!((last.left_score, last.right_score), (0, 2));
        assert_eq!(last.announcement.as_deref(), Some("Right Player Won!"));
        // One frame earlier the match was still open
        let before = &views[392];
        assert_eq!((before.left_score, before.right_score), (0, 1));
        assert!(before.announcement.is_none());
    }

    #[test]
    fn test_unusable_hold_never_reaches_the_loop() {
        let settings = Settings {
            win_hold_secs: 1e30,
            winning_score: 1,
            ..Default::default()
        };
        assert!(matches!(
            GameState::new(settings.clone()),
            Err(crate::ConfigError::InvalidHold(_))
        ));
        // Unvalidated, the hold falls back to zero
        assert_eq!(settings.win_hold(), Duration::ZERO);
    }
}
