//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of the game core. It polls
//! `crossterm` key events without blocking and maps them into
//! [`crate::types::PlayerCommand`]s, one key per tick.

pub mod map;
pub mod source;

pub use tui_pong_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{InputSource, ScriptedInput, TerminalInput};
