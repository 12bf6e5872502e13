//! Windowless platform
//!
//! Replays scripted input, reports frames through `log`, and paces with the
//! OS sleep. Enough to drive a full match from the command line or a test.

use std::path::Path;
use std::time::{Duration, Instant};

use super::{Clock, InputSource};
use crate::error::ConfigError;
use crate::renderer::{RenderView, Renderer};
use crate::sim::TickInput;

/// Plays back a fixed list of inputs, then holds no keys
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: Vec<TickInput>,
    cursor: usize,
    /// Quit once this many snapshots have been taken
    max_ticks: Option<u64>,
    taken: u64,
}

impl ScriptedInput {
    pub fn new(script: Vec<TickInput>) -> Self {
        Self {
            script,
            ..Default::default()
        }
    }

    /// No keys, ever
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    /// Load a JSON array of inputs, one entry per tick
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let script: Vec<TickInput> = serde_json::from_str(&json)?;
        log::info!(
            "Loaded input script with {} ticks from {}",
            script.len(),
            path.display()
        );
        Ok(Self::new(script))
    }
}

impl InputSource for ScriptedInput {
    fn snapshot(&mut self) -> TickInput {
        self.taken += 1;
        let input = self.script.get(self.cursor).copied().unwrap_or_default();
        self.cursor = (self.cursor + 1).min(self.script.len());
        input
    }

    fn quit_requested(&mut self) -> bool {
        self.max_ticks.is_some_and(|max| self.taken >= max)
    }
}

/// Logs score changes and announcements; every frame at trace level
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_score: Option<(u32, u32)>,
    announced: bool,
    frames: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, view: &RenderView) {
        self.frames += 1;
        log::trace!(
            "frame {}: ball ({:.1}, {:.1}) paddles {:.1} / {:.1}",
            self.frames,
            view.ball.center.x,
            view.ball.center.y,
            view.left_paddle.pos.y,
            view.right_paddle.pos.y
        );

        let score = (view.left_score, view.right_score);
        if self.last_score != Some(score) {
            log::info!("Score {} - {}", score.0, score.1);
            self.last_score = Some(score);
        }

        match &view.announcement {
            Some(text) if !self.announced => {
                log::info!("{}", text);
                self.announced = true;
            }
            None => self.announced = false,
            _ => {}
        }
    }
}

/// Sleep-based frame limiter
#[derive(Debug)]
pub struct SystemClock {
    last_frame: Option<Instant>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { last_frame: None }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn tick(&mut self, fps: u32) {
        let budget = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        if let Some(last) = self.last_frame {
            let elapsed = last.elapsed();
            if elapsed < budget {
                std::thread::sleep(budget - elapsed);
            }
        }
        self.last_frame = Some(Instant::now());
    }

    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
        // Don't count the hold against the next frame
        self.last_frame = Some(Instant::now());
    }
}

/// Never waits; counts what it was asked to do
#[derive(Debug, Default)]
pub struct UnpacedClock {
    pub frames: u64,
    pub delays: Vec<Duration>,
}

impl UnpacedClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for UnpacedClock {
    fn tick(&mut self, _fps: u32) {
        self.frames += 1;
    }

    fn delay(&mut self, duration: Duration) {
        self.delays.push(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_plays_then_idles() {
        let held = TickInput {
            left_up: true,
            ..Default::default()
        };
        let mut input = ScriptedInput::new(vec![held, held]);
        assert_eq!(input.snapshot(), held);
        assert_eq!(input.snapshot(), held);
        assert_eq!(input.snapshot(), TickInput::default());
        assert_eq!(input.taken, 3);
        assert!(!input.quit_requested());
    }

    #[test]
    fn test_scripted_input_quits_at_limit() {
        let mut input = ScriptedInput::idle().with_max_ticks(2);
        assert!(!input.quit_requested());
        input.snapshot();
        assert!(!input.quit_requested());
        input.snapshot();
        assert!(input.quit_requested());
    }

    #[test]
    fn test_scripted_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.json");
        std::fs::write(&path, r#"[{ "right_down": true }, {}]"#).unwrap();

        let mut input = ScriptedInput::load(&path).unwrap();
        assert!(input.snapshot().right_down);
        assert_eq!(input.snapshot(), TickInput::default());
    }

    #[test]
    fn test_scripted_input_rejects_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.json");
        std::fs::write(&path, "{}").unwrap();
        assert!(matches!(
            ScriptedInput::load(&path),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_unpaced_clock_records() {
        let mut clock = UnpacedClock::new();
        clock.tick(60);
        clock.tick(60);
        clock.delay(Duration::from_secs(5));
        assert_eq!(clock.frames, 2);
        assert_eq!(clock.delays, vec![Duration::from_secs(5)]);
    }

    #[test]
    fn test_system_clock_paces_frames() {
        let mut clock = SystemClock::new();
        let start = Instant::now();
        clock.tick(100);
        clock.tick(100);
        assert!(start.elapsed() >= Duration::from_millis(9));
    }
}
