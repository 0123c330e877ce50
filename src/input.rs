//! Keyboard input: maps crossterm key events to game commands
//!
//! The game loop reads at most one pending input per tick, so a held key
//! becomes a stream of repeat presses spread over consecutive ticks and a
//! burst of taps queues up instead of being dropped. `poll_input` mirrors
//! that with a zero-timeout poll that consumes a single event.

use std::time::{Duration, Instant};

use anyhow::Result;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::types::Command;

/// One input worth reacting to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(Command),
    /// Terminal geometry changed; the screen needs a full repaint
    Resized,
}

/// Map a key event to a command. Arrows and WASD move and rotate, space is
/// an alternate rotate, Escape quits. Only presses count; terminals that
/// report repeats and releases get those filtered out here.
pub fn map_key(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::SoftDrop),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char(' ') => {
            Some(Command::Rotate)
        }
        KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Take at most one event from the input queue without blocking.
///
/// An unmapped key or a non-key event still consumes its slot for this
/// tick and yields `None`.
pub fn poll_input() -> Result<Option<Input>> {
    if !event::poll(Duration::ZERO)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) => Ok(map_key(&key).map(Input::Key)),
        Event::Resize(_, _) => Ok(Some(Input::Resized)),
        _ => Ok(None),
    }
}

/// Block until any key press arrives or the timeout expires
pub fn wait_for_key(timeout: Duration) -> Result<()> {
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() || !event::poll(remaining)? {
            return Ok(());
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
