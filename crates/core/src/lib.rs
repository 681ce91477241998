//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the maze, the movement and collision rules, and the
//! scoring/win state. It has **no dependencies** on terminals or real clocks:
//! every time-dependent operation takes the current game-clock time in
//! milliseconds, so the same inputs always give the same game.
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size maze of walls, gate, open cells and collectibles
//! - [`collision`]: rectangular shape vs. grid overlap test
//! - [`cadence`]: wall-clock rate limiter used for movement
//! - [`actor`]: player position, facing, direction-request deque, score, lives
//! - [`game_state`]: owns grid and actor; consumes points and detects the win
//! - [`snapshot`]: render-ready frame matrix with the actor overlaid
//!
//! # Movement Rules
//!
//! - **Cadence**: the actor moves at most once every 1000/15 ms
//! - **Turning**: queued requests are tried oldest first; a blocked turn stays
//!   queued, a request older than 1000 ms is dropped
//! - **Wraparound**: leaving the left edge enters on the right and vice versa
//! - **Walls**: a blocked step leaves the actor in place
//!
//! # Example
//!
//! ```
//! use tui_pacman_core::GameState;
//! use tui_pacman_types::{Direction, DirectionRequest};
//!
//! let mut game = GameState::classic().unwrap();
//! let start = game.actor().position();
//!
//! game.enqueue(DirectionRequest::new(Direction::Left, 0));
//! game.tick(100);
//!
//! assert_eq!(game.actor().facing(), Direction::Left);
//! assert_eq!(game.actor().position(), (start.0 - 1, start.1));
//! assert_eq!(game.score(), 10);
//! ```

pub mod actor;
pub mod cadence;
pub mod collision;
pub mod game_state;
pub mod grid;
pub mod snapshot;

pub use tui_pacman_types as types;

// Re-export commonly used types for convenience
pub use actor::{Actor, MoveOutcome};
pub use cadence::CadenceGate;
pub use collision::{collides, Shape};
pub use game_state::{GameEvent, GameState, GameStatus, TickEvents, START_FACING};
pub use grid::{Grid, LayoutError, CLASSIC_LAYOUT};
pub use snapshot::{GameSnapshot, SnapshotCell};
