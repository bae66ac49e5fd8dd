//! Crossterm-backed [`InputSource`].

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::engine::{InputEvent, InputSource};
use crate::map::{handle_key_event, should_quit};

/// Reads key and resize events from the terminal.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

/// Translate one terminal event; `None` for anything the game ignores.
pub fn translate_event(ev: Event) -> Option<InputEvent> {
    match ev {
        Event::Key(key) => translate_key(key),
        Event::Resize(_, _) => Some(InputEvent::Redraw),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<InputEvent> {
    // Auto-repeat counts as a press; repeated turns are rejected by the game anyway.
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }
    handle_key_event(key).map(InputEvent::Action)
}

impl InputSource for CrosstermInput {
    fn poll(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(translate_event(event::read()?))
    }
}
