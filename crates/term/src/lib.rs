//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: [`GameView`] turns a
//! [`GameSnapshot`](tui_pacman_core::GameSnapshot) into a [`FrameBuffer`], and
//! [`TerminalRenderer`] flushes framebuffers to the terminal through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep view code pure so frames can be asserted on in tests
//! - Let one switch turn all color output off

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_pacman_core as core;
pub use tui_pacman_types as types;

pub use fb::{palette, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{glyph, AnchorY, GameView, Viewport};
pub use renderer::{detect_color_support, encode_diff_into, encode_full_into, TerminalRenderer};
