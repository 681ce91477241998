//! Collision detection between rectangular shapes and the grid.
//!
//! The actor is a 1x1 shape today, but the check works for any rectangular
//! occupancy mask up to [`MAX_SHAPE_CELLS`] cells, so wider sprites can reuse it.

use arrayvec::ArrayVec;

use crate::grid::Grid;

/// Largest supported shape area (4x4).
pub const MAX_SHAPE_CELLS: usize = 16;

/// Rectangular occupancy mask, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: ArrayVec<bool, MAX_SHAPE_CELLS>,
}

impl Shape {
    /// The single occupied cell used by the actor.
    pub fn single() -> Self {
        let mut cells = ArrayVec::new();
        cells.push(true);
        Self {
            width: 1,
            height: 1,
            cells,
        }
    }

    /// Build a shape from rows of occupancy flags.
    ///
    /// Returns None if rows differ in length or the area exceeds
    /// [`MAX_SHAPE_CELLS`].
    pub fn from_rows(rows: &[&[bool]]) -> Option<Self> {
        let width = rows.first().map_or(0, |r| r.len());
        let mut cells = ArrayVec::new();
        for row in rows {
            if row.len() != width {
                return None;
            }
            for &occupied in row.iter() {
                cells.try_push(occupied).ok()?;
            }
        }
        Some(Self {
            width: u8::try_from(width).ok()?,
            height: u8::try_from(rows.len()).ok()?,
            cells,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn is_occupied(&self, x: u8, y: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Height used for the vertical bounds test: the index of the first
    /// fully-empty row from the top, or the full height when there is none.
    pub fn effective_height(&self) -> i32 {
        (0..self.height)
            .find(|&y| (0..self.width).all(|x| !self.is_occupied(x, y)))
            .unwrap_or(self.height) as i32
    }
}

/// Whether `shape` placed at `offset` overlaps a solid cell or leaves the
/// grid vertically.
///
/// Horizontal coordinates are expected to be wrapped already; an occupied
/// cell that still lands outside the grid horizontally counts as a hit.
pub fn collides(grid: &Grid, shape: &Shape, offset: (i32, i32)) -> bool {
    let (ox, oy) = offset;

    if oy < 0 || oy + shape.effective_height() > grid.height() {
        return true;
    }

    for y in 0..shape.height() {
        for x in 0..shape.width() {
            if shape.is_occupied(x, y) && grid.is_solid(ox + x as i32, oy + y as i32) {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged_and_oversized() {
        assert!(Shape::from_rows(&[&[true, false], &[true]]).is_none());
        let wide = [true; 17];
        assert!(Shape::from_rows(&[&wide]).is_none());
    }

    #[test]
    fn effective_height_stops_at_first_empty_row() {
        let s = Shape::from_rows(&[&[true, true], &[false, false], &[true, false]]).unwrap();
        assert_eq!(s.effective_height(), 1);
        assert_eq!(Shape::single().effective_height(), 1);

        let empty = Shape::from_rows(&[&[false], &[false]]).unwrap();
        assert_eq!(empty.effective_height(), 0);
    }
}
