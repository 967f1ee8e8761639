//! Terminal Pong runner (default binary).
//!
//! Measures the terminal once, builds the field from it and runs the fixed-tick
//! loop until a quit key (`q`, `Esc`, `Ctrl-C`). Logs go to stderr and are off
//! unless `RUST_LOG` is set; redirect stderr when enabling them.

use anyhow::{Context, Result};

use tui_pong::core::{Field, Game};
use tui_pong::engine::{run, EngineConfig};
use tui_pong::input::TerminalInput;
use tui_pong::term::TerminalCanvas;

fn main() -> Result<()> {
    env_logger::init();

    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let field = Field::new(rows, cols).context("cannot start game")?;
    let mut game = Game::new(field);

    let mut canvas = TerminalCanvas::new(cols, rows);
    canvas.enter()?;

    let result = run(
        &mut game,
        &mut TerminalInput::new(),
        &mut canvas,
        EngineConfig::default(),
    );

    // Always try to restore terminal state.
    if let Err(e) = canvas.exit() {
        log::warn!("failed to restore terminal: {:#}", e);
    }

    let summary = result?;
    log::info!(
        "final score {} - {} after {} ticks",
        summary.player_score,
        summary.opponent_score,
        summary.ticks
    );
    Ok(())
}
