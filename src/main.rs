//! Classic Pong entry point
//!
//! Runs the match loop on the headless platform. A windowed frontend plugs in
//! by implementing the `platform` and `renderer` traits.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use classic_pong::platform::{Clock, LogRenderer, ScriptedInput, SystemClock, UnpacedClock};
use classic_pong::sim::GameState;
use classic_pong::{Runner, Settings};

#[derive(Parser, Debug)]
#[command(name = "classic-pong", about = "Two-player Pong simulation")]
struct Cli {
    /// Settings JSON (defaults used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON array of per-tick inputs to replay
    #[arg(long)]
    script: Option<PathBuf>,

    /// Quit after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Run as fast as possible instead of at the configured frame rate
    #[arg(long)]
    unpaced: bool,

    /// Write the effective settings to this path and exit
    #[arg(long)]
    dump_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(path) = &cli.dump_config {
        settings.validate().context("invalid settings")?;
        settings
            .save(path)
            .with_context(|| format!("failed to write settings to {}", path.display()))?;
        return Ok(());
    }
    let state = GameState::new(settings).context("invalid settings")?;

    let mut input = match &cli.script {
        Some(path) => ScriptedInput::load(path)
            .with_context(|| format!("failed to load input script {}", path.display()))?,
        None => ScriptedInput::idle(),
    };
    if let Some(max_ticks) = cli.max_ticks {
        input = input.with_max_ticks(max_ticks);
    }

    log::info!("Classic Pong (headless) starting...");
    if cli.unpaced {
        run(state, input, UnpacedClock::new());
    } else {
        run(state, input, SystemClock::new());
    }
    Ok(())
}

fn run<C: Clock>(state: GameState, input: ScriptedInput, clock: C) {
    let mut runner = Runner::new(state, input, LogRenderer::new(), clock);
    let summary = runner.run();
    println!(
        "Ran {} ticks, {} matches completed, final score {} - {}",
        summary.ticks,
        summary.matches_completed,
        runner.state.score.left,
        runner.state.score.right
    );
}
