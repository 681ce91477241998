//! Tick loop for the maze game.
//!
//! The runner calls [`TickLoop::step`] 60 times per second. Each step advances
//! the [`GameState`](tui_pacman_core::GameState) (which throttles movement on
//! its own) and reports whether the frame should be redrawn according to the
//! configured frames-per-second target.

pub mod clock;
pub mod config;
pub mod render_throttle;
pub mod tick_loop;

pub use tui_pacman_core as core;
pub use tui_pacman_types as types;

pub use clock::{GameClock, TickSchedule, TICK_INTERVAL};
pub use config::GameConfig;
pub use render_throttle::RenderThrottle;
pub use tick_loop::{TickLoop, TickReport};
