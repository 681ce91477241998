//! Grid module - the maze the actor moves through
//!
//! The grid is a fixed-size 2D array of [`Tile`]s stored row-major in a flat
//! vector. Dimensions never change after construction; the only mutation is
//! eating a collectible, which turns it into [`Tile::Open`].
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use std::fmt;

use crate::types::Tile;

/// The built-in classic maze.
///
/// `#` wall, `$` gate, `.` point, `o` power pellet, ` ` open, `P` spawn.
pub const CLASSIC_LAYOUT: &str = "\
############################
#............##............#
#.####.#####.##.#####.####.#
#o####.#####.##.#####.####o#
#.####.#####.##.#####.####.#
#..........................#
#.####.##.########.##.####.#
#.####.##.########.##.####.#
#......##....##....##......#
######.#####.##.#####.######
######.#####.##.#####.######
######.##..........##.######
######.##.###$$###.##.######
######.##.#      #.##.######
..........#      #..........
######.##.#      #.##.######
######.##.########.##.######
######.##..........##.######
######.##.########.##.######
######.##.########.##.######
#............##............#
#.####.#####.##.#####.####.#
#.####.#####.##.#####.####.#
#o..##.......P........##..o#
###.##.##.########.##.##.###
###.##.##.########.##.##.###
#......##....##....##......#
#.##########.##.##########.#
#.##########.##.##########.#
#..........................#
############################";

const SPAWN_GLYPH: char = 'P';

/// Reasons a textual layout can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    Empty,
    RaggedRow { row: usize, expected: usize, found: usize },
    UnknownGlyph { x: usize, y: usize, glyph: char },
    MissingSpawn,
    MultipleSpawns,
}

impl LayoutError {
    pub fn code(self) -> &'static str {
        match self {
            LayoutError::Empty => "empty_layout",
            LayoutError::RaggedRow { .. } => "ragged_row",
            LayoutError::UnknownGlyph { .. } => "unknown_glyph",
            LayoutError::MissingSpawn | LayoutError::MultipleSpawns => "bad_spawn",
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LayoutError::Empty => write!(f, "layout has no rows"),
            LayoutError::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            LayoutError::UnknownGlyph { x, y, glyph } => {
                write!(f, "unknown glyph {glyph:?} at ({x}, {y})")
            }
            LayoutError::MissingSpawn => write!(f, "layout has no spawn cell"),
            LayoutError::MultipleSpawns => write!(f, "layout has more than one spawn cell"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// The maze grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    /// Flat array of tiles, row-major order (y * width + x)
    tiles: Vec<Tile>,
    spawn: (i32, i32),
}

impl Grid {
    /// Parse a textual layout.
    ///
    /// Every row must have the same number of glyphs and exactly one `P`
    /// spawn marker must be present (it becomes an open cell).
    pub fn parse(layout: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = layout.lines().collect();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(LayoutError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        let mut spawn = None;

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LayoutError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, glyph) in row.chars().enumerate() {
                if glyph == SPAWN_GLYPH {
                    if spawn.is_some() {
                        return Err(LayoutError::MultipleSpawns);
                    }
                    spawn = Some((x as i32, y as i32));
                    tiles.push(Tile::Open);
                    continue;
                }
                let tile =
                    Tile::from_glyph(glyph).ok_or(LayoutError::UnknownGlyph { x, y, glyph })?;
                tiles.push(tile);
            }
        }

        Ok(Self {
            width: width as i32,
            height: rows.len() as i32,
            tiles,
            spawn: spawn.ok_or(LayoutError::MissingSpawn)?,
        })
    }

    /// The built-in 28x31 maze.
    pub fn classic() -> Result<Self, LayoutError> {
        Self::parse(CLASSIC_LAYOUT)
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The designated actor spawn cell.
    pub fn spawn(&self) -> (i32, i32) {
        self.spawn
    }

    /// Get tile at position (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        self.index(x, y).map(|idx| self.tiles[idx])
    }

    /// Whether (x, y) blocks movement. Out-of-bounds cells are solid.
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.get(x, y).map_or(true, Tile::is_solid)
    }

    /// Wrap a column index across the left/right edges.
    ///
    /// Only a single step past either edge is corrected, which is all the
    /// actor ever produces.
    pub fn wrap_x(&self, x: i32) -> i32 {
        if x < 0 {
            self.width - 1
        } else if x > self.width - 1 {
            0
        } else {
            x
        }
    }

    /// Eat the collectible at (x, y), leaving an open cell behind.
    ///
    /// Returns the eaten tile, or None when there was nothing to collect.
    pub fn take_point(&mut self, x: i32, y: i32) -> Option<Tile> {
        let idx = self.index(x, y)?;
        let tile = self.tiles[idx];
        if !tile.is_collectible() {
            return None;
        }
        self.tiles[idx] = Tile::Open;
        Some(tile)
    }

    /// Number of collectibles still on the grid.
    pub fn point_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_collectible()).count()
    }

    /// Row-major view of all tiles.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
