//! Turns raw key events into game intents.
//!
//! Terminals that report key releases would otherwise queue a second request
//! per keypress, so releases are ignored. Auto-repeat presses are kept: each
//! one becomes a fresh, newly timestamped request.

use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::map::{direction_for_key, should_quit};
use crate::types::DirectionRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIntent {
    Turn(DirectionRequest),
    Quit,
}

/// Translate a key event observed at game-clock time `now_ms`.
pub fn intent_for_key(key: KeyEvent, now_ms: u64) -> Option<InputIntent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(InputIntent::Quit);
    }
    direction_for_key(key).map(|dir| InputIntent::Turn(DirectionRequest::new(dir, now_ms)))
}

/// Translate any terminal event; non-key events yield nothing.
pub fn intent_for_event(event: &Event, now_ms: u64) -> Option<InputIntent> {
    match event {
        Event::Key(key) => intent_for_key(*key, now_ms),
        _ => None,
    }
}
