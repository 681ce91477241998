//! Grid tests - layout parsing, lookup, wraparound and point consumption

use tui_pacman::core::{Grid, LayoutError};
use tui_pacman::types::{Tile, GRID_HEIGHT, GRID_WIDTH};

#[test]
fn test_classic_grid_dimensions_and_spawn() {
    let grid = Grid::classic().unwrap();
    assert_eq!(grid.width(), GRID_WIDTH);
    assert_eq!(grid.height(), GRID_HEIGHT);
    assert_eq!(grid.spawn(), (13, 23));
    assert_eq!(grid.get(13, 23), Some(Tile::Open));
    assert_eq!(grid.tiles().len(), (GRID_WIDTH * GRID_HEIGHT) as usize);
}

#[test]
fn test_classic_grid_contents() {
    let grid = Grid::classic().unwrap();

    // Corners are walls, the ghost-house door is a gate.
    assert_eq!(grid.get(0, 0), Some(Tile::Wall));
    assert_eq!(grid.get(27, 30), Some(Tile::Wall));
    assert_eq!(grid.get(13, 12), Some(Tile::Gate));
    assert_eq!(grid.get(14, 12), Some(Tile::Gate));
    assert!(grid.is_solid(13, 12));

    // Power pellets in the four corners of the play area.
    assert_eq!(grid.get(1, 3), Some(Tile::PowerPellet));
    assert_eq!(grid.get(26, 3), Some(Tile::PowerPellet));
    assert_eq!(grid.get(1, 23), Some(Tile::PowerPellet));
    assert_eq!(grid.get(26, 23), Some(Tile::PowerPellet));

    // Side tunnel is open on both edges.
    assert!(!grid.is_solid(0, 14));
    assert!(!grid.is_solid(27, 14));

    // Ghost house interior holds no collectibles.
    for y in 13..=15 {
        for x in 11..=16 {
            assert_eq!(grid.get(x, y), Some(Tile::Open), "({}, {})", x, y);
        }
    }

    assert_eq!(grid.point_count(), 299);
}

#[test]
fn test_get_out_of_bounds() {
    let grid = Grid::classic().unwrap();
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(GRID_WIDTH, 0), None);
    assert_eq!(grid.get(0, GRID_HEIGHT), None);

    assert!(grid.is_solid(-1, 14));
    assert!(grid.is_solid(GRID_WIDTH, 14));
    assert!(grid.is_solid(5, -1));
}

#[test]
fn test_wrap_x() {
    let grid = Grid::classic().unwrap();
    assert_eq!(grid.wrap_x(-1), GRID_WIDTH - 1);
    assert_eq!(grid.wrap_x(GRID_WIDTH), 0);
    assert_eq!(grid.wrap_x(0), 0);
    assert_eq!(grid.wrap_x(GRID_WIDTH - 1), GRID_WIDTH - 1);
    assert_eq!(grid.wrap_x(12), 12);
}

#[test]
fn test_take_point_clears_collectibles_only() {
    let mut grid = Grid::classic().unwrap();
    let before = grid.point_count();

    assert_eq!(grid.take_point(1, 1), Some(Tile::Point));
    assert_eq!(grid.get(1, 1), Some(Tile::Open));
    assert_eq!(grid.take_point(1, 1), None);

    assert_eq!(grid.take_point(1, 3), Some(Tile::PowerPellet));
    assert_eq!(grid.take_point(0, 0), None);
    assert_eq!(grid.get(0, 0), Some(Tile::Wall));
    assert_eq!(grid.take_point(-3, 0), None);

    assert_eq!(grid.point_count(), before - 2);
    assert_eq!(grid.width(), GRID_WIDTH);
    assert_eq!(grid.height(), GRID_HEIGHT);
}

#[test]
fn test_parse_small_layout() {
    let grid = Grid::parse("#####\n#P.o#\n# $ #\n#####").unwrap();
    assert_eq!(grid.width(), 5);
    assert_eq!(grid.height(), 4);
    assert_eq!(grid.spawn(), (1, 1));
    assert_eq!(grid.get(2, 1), Some(Tile::Point));
    assert_eq!(grid.get(3, 1), Some(Tile::PowerPellet));
    assert_eq!(grid.get(2, 2), Some(Tile::Gate));
    assert_eq!(grid.get(1, 2), Some(Tile::Open));
    assert_eq!(grid.point_count(), 2);
}

#[test]
fn test_parse_errors() {
    assert_eq!(Grid::parse(""), Err(LayoutError::Empty));
    assert_eq!(
        Grid::parse("###\n#P\n###"),
        Err(LayoutError::RaggedRow {
            row: 1,
            expected: 3,
            found: 2
        })
    );
    assert_eq!(
        Grid::parse("###\n#P#\n#x#"),
        Err(LayoutError::UnknownGlyph {
            x: 1,
            y: 2,
            glyph: 'x'
        })
    );
    assert_eq!(Grid::parse("###\n#.#\n###"), Err(LayoutError::MissingSpawn));
    assert_eq!(Grid::parse("####\n#PP#\n####"), Err(LayoutError::MultipleSpawns));
}

#[test]
fn test_layout_error_messages() {
    let err = Grid::parse("###\n#P\n###").unwrap_err();
    assert_eq!(err.code(), "ragged_row");
    assert_eq!(err.to_string(), "row 1 has 2 cells, expected 3");
    assert_eq!(LayoutError::MissingSpawn.code(), "bad_spawn");
}
