//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The built-in maze is the classic arcade layout:
//!
//! - **Width**: 28 columns (indexed 0-27)
//! - **Height**: 31 rows (indexed 0-30)
//! - **Spawn position**: (13, 23)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds on the game clock:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICKS_PER_SECOND` | 60 | Fixed scheduling cadence of the tick loop |
//! | `MOVES_PER_SECOND` | 15 | Actor movement cadence |
//! | `MOVE_INTERVAL_MS` | 66 | A move happens once more than this has elapsed |
//! | `REQUEST_STALE_MS` | 1000 | Queued direction requests older than this are dropped |
//! | `DEFAULT_FPS` | 60 | Default redraw rate |
//!
//! # Examples
//!
//! ```
//! use tui_pacman_types::{Direction, Tile, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(Direction::Left.delta(), (-1, 0));
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//!
//! assert!(Tile::from_glyph('#').unwrap().is_solid());
//! assert_eq!(Tile::Point.score(), 10);
//!
//! assert_eq!(GRID_WIDTH, 28);
//! assert_eq!(GRID_HEIGHT, 31);
//! ```

/// Classic maze width in cells (28 columns)
pub const GRID_WIDTH: i32 = 28;

/// Classic maze height in cells (31 rows)
pub const GRID_HEIGHT: i32 = 31;

/// Logical ticks per second driven by the tick loop.
pub const TICKS_PER_SECOND: u32 = 60;

/// Length of one logical tick in milliseconds (fractional: 16.67ms).
pub const TICK_MS: f64 = 1000.0 / TICKS_PER_SECOND as f64;

/// Actor movement cadence.
pub const MOVES_PER_SECOND: u64 = 15;

/// Minimum gap between moves. Integer division on purpose: a move is allowed
/// once the elapsed time is strictly greater than this, i.e. `> 66.67ms`.
pub const MOVE_INTERVAL_MS: u64 = 1000 / MOVES_PER_SECOND;

/// Maximum age of a queued direction request.
pub const REQUEST_STALE_MS: u64 = 1000;

/// Maximum number of pending direction requests held by the actor.
pub const MAX_QUEUED_REQUESTS: usize = 16;

/// Default redraw rate.
pub const DEFAULT_FPS: u32 = 60;

/// Highest accepted redraw rate.
pub const MAX_FPS: u32 = 240;

/// Lives the actor starts with.
pub const START_LIVES: u32 = 3;

/// Points for a regular dot.
pub const POINT_SCORE: u32 = 10;

/// Points for a power pellet.
pub const POWER_PELLET_SCORE: u32 = 50;


/// The four cardinal directions.
///
/// Screen coordinates: `x` grows to the right, `y` grows downward, so
/// [`Direction::Up`] is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector `(dx, dy)` for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn from_delta(delta: (i32, i32)) -> Option<Self> {
        match delta {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A single maze cell.
///
/// `Wall` and `Gate` block movement. `Point` and `PowerPellet` are
/// collectibles and turn into `Open` once eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    /// Ghost-house door. Solid for the actor.
    Gate,
    Open,
    Point,
    PowerPellet,
}

impl Tile {
    /// Parse a layout glyph.
    ///
    /// The spawn marker `P` is not a tile; the grid parser handles it.
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Tile::Wall),
            '$' => Some(Tile::Gate),
            '.' => Some(Tile::Point),
            'o' => Some(Tile::PowerPellet),
            ' ' => Some(Tile::Open),
            _ => None,
        }
    }

    pub fn is_solid(self) -> bool {
        matches!(self, Tile::Wall | Tile::Gate)
    }

    pub fn is_collectible(self) -> bool {
        matches!(self, Tile::Point | Tile::PowerPellet)
    }

    /// Score awarded for eating this tile (0 for non-collectibles).
    pub fn score(self) -> u32 {
        match self {
            Tile::Point => POINT_SCORE,
            Tile::PowerPellet => POWER_PELLET_SCORE,
            Tile::Wall | Tile::Gate | Tile::Open => 0,
        }
    }
}

/// A queued, timestamped request to change the actor's facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionRequest {
    pub dir: Direction,
    /// Game-clock time (ms) at which the key was pressed.
    pub issued_ms: u64,
}

impl DirectionRequest {
    pub fn new(dir: Direction, issued_ms: u64) -> Self {
        Self { dir, issued_ms }
    }

    /// Whether this request is too old to apply at `now_ms`.
    pub fn is_stale(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.issued_ms) > REQUEST_STALE_MS
    }
}
