//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into timestamped
//! [`DirectionRequest`](crate::types::DirectionRequest)s or a quit intent.
//! Stamping happens here, at the moment the key is read, so the actor can
//! later tell how stale a request has become.

pub mod listener;
pub mod map;

pub use tui_pacman_types as types;

pub use listener::{intent_for_event, intent_for_key, InputIntent};
pub use map::{direction_for_key, should_quit};
