use crate::game_state::GameStatus;
use crate::types::{Direction, Tile};

/// One cell of the frame matrix: a grid tile, or the actor drawn over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotCell {
    Tile(Tile),
    Actor,
}

/// Render-ready copy of the game: the grid with the actor overlaid plus the
/// HUD counters. Rebuilt for every redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: i32,
    pub height: i32,
    /// Row-major, `width * height` cells.
    pub cells: Vec<SnapshotCell>,
    pub actor: (i32, i32),
    pub facing: Direction,
    pub score: u32,
    pub lives: u32,
    pub points_left: usize,
    pub status: GameStatus,
}

impl GameSnapshot {
    pub(crate) fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<SnapshotCell> {
        self.index(x, y).and_then(|i| self.cells.get(i).copied())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[SnapshotCell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            actor: (0, 0),
            facing: Direction::Right,
            score: 0,
            lives: 0,
            points_left: 0,
            status: GameStatus::Playing,
        }
    }
}
