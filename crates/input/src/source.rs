//! Input collaborator: where key events come from.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

/// Non-blocking key source, polled once per tick.
pub trait InputSource {
    /// Return the next pending key, or `None` if nothing is waiting.
    fn poll_key(&mut self) -> io::Result<Option<KeyEvent>>;
}

/// Reads keys from the real terminal via crossterm.
///
/// Expects raw mode to be enabled by the renderer.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll_key(&mut self) -> io::Result<Option<KeyEvent>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        // Resize, mouse and focus events are consumed and dropped.
        match event::read()? {
            Event::Key(key) => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}

/// Replays a fixed script, one entry per poll. `None` entries are idle ticks.
///
/// Once the script runs out every poll returns `None`.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    script: VecDeque<Option<KeyEvent>>,
}

impl ScriptedInput {
    pub fn new<I>(script: I) -> Self
    where
        I: IntoIterator<Item = Option<KeyEvent>>,
    {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Script that presses each key on consecutive ticks.
    pub fn keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = KeyEvent>,
    {
        Self::new(keys.into_iter().map(Some))
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_key(&mut self) -> io::Result<Option<KeyEvent>> {
        Ok(self.script.pop_front().flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn scripted_input_replays_in_order() {
        let mut input = ScriptedInput::new([
            Some(KeyEvent::from(KeyCode::Up)),
            None,
            Some(KeyEvent::from(KeyCode::Down)),
        ]);
        assert_eq!(input.remaining(), 3);
        assert_eq!(input.poll_key().unwrap(), Some(KeyEvent::from(KeyCode::Up)));
        assert_eq!(input.poll_key().unwrap(), None);
        assert_eq!(input.poll_key().unwrap(), Some(KeyEvent::from(KeyCode::Down)));
        assert_eq!(input.remaining(), 0);
        assert_eq!(input.poll_key().unwrap(), None);
    }

    #[test]
    fn scripted_keys_helper() {
        let mut input = ScriptedInput::keys([KeyEvent::from(KeyCode::Char('q'))]);
        assert_eq!(
            input.poll_key().unwrap(),
            Some(KeyEvent::from(KeyCode::Char('q')))
        );
    }
}
