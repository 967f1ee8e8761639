use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_pong::core::{Body, Field, Game};
use tui_pong::engine::{run, EngineConfig};
use tui_pong::input::ScriptedInput;
use tui_pong::term::FrameBuffer;
use tui_pong::types::Position;

#[test]
fn scripted_session_ends_on_ctrl_c() {
    let mut game = Game::new(Field::new(24, 80).unwrap());
    let mut fb = FrameBuffer::new(80, 24);

    let mut script: Vec<Option<KeyEvent>> = Vec::new();
    script.extend(std::iter::repeat(Some(KeyEvent::from(KeyCode::Char('w')))).take(3));
    script.extend(std::iter::repeat(None).take(10));
    // Unmapped keys are ignored.
    script.push(Some(KeyEvent::from(KeyCode::Char('x'))));
    script.push(Some(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    let mut input = ScriptedInput::new(script);

    let summary = run(&mut game, &mut input, &mut fb, EngineConfig::unpaced()).unwrap();

    assert_eq!(summary.ticks, 15);
    assert_eq!(game.player().position(), Position::new(7, 3));
    assert_eq!(summary.player_score, 0);
    assert_eq!(summary.opponent_score, 0);
}

#[test]
fn idle_session_runs_until_tick_limit() {
    let mut game = Game::new(Field::new(24, 80).unwrap());
    let mut fb = FrameBuffer::new(80, 24);
    let mut input = ScriptedInput::default();

    let summary = run(
        &mut game,
        &mut input,
        &mut fb,
        EngineConfig::unpaced().with_max_ticks(1_000),
    )
    .unwrap();

    assert_eq!(summary.ticks, 1_000);
    // The human never moves; the opponent scores every 396 ticks on this field.
    assert_eq!(summary.opponent_score, 2);
    assert_eq!(summary.player_score, 0);
}
