//! Fixed-tick game loop.
//!
//! Every tick reads at most one key from the input source, applies it to the
//! human paddle, runs [`Game::tick`], and renders the frame:
//!
//! ```text
//! poll key -> apply command -> tick -> render -> sleep until next tick
//! ```
//!
//! The running flag is checked at the top of each iteration, so a quit key
//! lets the current tick finish (update and render) before the loop exits.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use tui_pong_core::{Game, Renderer, TickEvent, TickReport};
use tui_pong_input::{handle_key_event, InputSource};
use tui_pong_types::TICK_MS;

pub use tui_pong_core as core;
pub use tui_pong_input as input;
pub use tui_pong_types as types;

/// Loop settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Tick period. `Duration::ZERO` runs unpaced.
    pub tick: Duration,
    /// Stop after this many ticks even without a quit key.
    pub max_ticks: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(u64::from(TICK_MS)),
            max_ticks: None,
        }
    }
}

impl EngineConfig {
    /// No sleeping between ticks (tests, benchmarks, replays).
    pub fn unpaced() -> Self {
        Self {
            tick: Duration::ZERO,
            max_ticks: None,
        }
    }

    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }
}

/// Result of a finished loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub player_score: u32,
    pub opponent_score: u32,
}

/// Run one tick: input, update, render.
pub fn step<I, R>(game: &mut Game, input: &mut I, renderer: &mut R) -> Result<TickReport>
where
    I: InputSource,
    R: Renderer,
    R::Error: Into<anyhow::Error>,
{
    if let Some(key) = input.poll_key().context("failed to poll input")? {
        if let Some(cmd) = handle_key_event(key) {
            game.apply_command(cmd)
                .with_context(|| format!("player command {:?} left the field", cmd))?;
        }
    }

    let report = game.tick().map_err(|e| {
        log::error!("tick {} violated the field bounds: {}", game.tick_count(), e);
        anyhow::Error::new(e).context("ball or paddle left the field")
    })?;

    for event in report.iter() {
        match event {
            TickEvent::Goal { scorer } => log::info!(
                "goal for {} at tick {}",
                scorer.as_str(),
                game.tick_count()
            ),
            other => log::trace!("{:?}", other),
        }
    }

    game.render(renderer).map_err(Into::<anyhow::Error>::into)?;
    Ok(report)
}

/// Run until the game stops (quit key) or `config.max_ticks` is reached.
pub fn run<I, R>(game: &mut Game, input: &mut I, renderer: &mut R, config: EngineConfig) -> Result<RunSummary>
where
    I: InputSource,
    R: Renderer,
    R::Error: Into<anyhow::Error>,
{
    log::info!("game loop started, tick = {:?}", config.tick);
    let first_tick = game.tick_count();

    while game.is_running() {
        if let Some(max) = config.max_ticks {
            if game.tick_count() - first_tick >= max {
                break;
            }
        }

        let started = Instant::now();
        step(game, input, renderer)?;

        if let Some(rest) = config.tick.checked_sub(started.elapsed()) {
            if !rest.is_zero() {
                thread::sleep(rest);
            }
        }
    }

    let summary = RunSummary {
        ticks: game.tick_count() - first_tick,
        player_score: game.player().score(),
        opponent_score: game.opponent().score(),
    };
    log::info!(
        "game loop finished after {} ticks ({} - {})",
        summary.ticks,
        summary.player_score,
        summary.opponent_score
    );
    Ok(summary)
}
