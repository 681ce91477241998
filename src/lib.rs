//! Terminal maze runner (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, tests and
//! benches can use `tui_pacman::{core, engine, input, term, types}`.

pub use tui_pacman_core as core;
pub use tui_pacman_engine as engine;
pub use tui_pacman_input as input;
pub use tui_pacman_term as term;
pub use tui_pacman_types as types;
