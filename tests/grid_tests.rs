//! Grid tests - bounds-checked cell storage

use smocks::core::{Block, Grid, GridError};
use smocks::types::{Color, DEFAULT_COLUMNS, DEFAULT_ROWS};

#[test]
fn test_grid_new_empty() {
    let grid: Grid<Block> = Grid::new(DEFAULT_COLUMNS, DEFAULT_ROWS);
    assert_eq!(grid.columns(), 10);
    assert_eq!(grid.rows(), 20);

    for row in 0..DEFAULT_ROWS as i32 {
        for column in 0..DEFAULT_COLUMNS as i32 {
            assert_eq!(grid.get(column, row), Ok(None), "cell ({column}, {row})");
        }
    }
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::new(10, 20);
    let x = Block::new(3, 5, Color::Purple);

    assert_eq!(grid.set(3, 5, Some(x)), Ok(None));
    assert_eq!(grid.get(3, 5), Ok(Some(&x)));
    assert_eq!(grid.get(3, 6), Ok(None));

    // Clear a cell
    assert_eq!(grid.set(3, 5, None), Ok(Some(x)));
    assert_eq!(grid.get(3, 5), Ok(None));
}

#[test]
fn test_grid_row_major_layout() {
    let mut grid = Grid::new(4, 3);
    grid.set(1, 2, Some('x')).unwrap();

    let idx = grid.cells().iter().position(Option::is_some);
    assert_eq!(idx, Some(2 * 4 + 1));
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid: Grid<Block> = Grid::new(10, 20);

    for (column, row) in [(-1, 0), (0, -1), (10, 0), (0, 20)] {
        assert_eq!(
            grid.get(column, row),
            Err(GridError::OutOfBounds {
                column,
                row,
                columns: 10,
                rows: 20
            })
        );
    }
}

#[test]
fn test_grid_set_out_of_bounds_leaves_cells_untouched() {
    let mut grid = Grid::new(10, 20);

    assert!(grid.set(10, 0, Some(1u8)).is_err());
    assert!(grid.set(0, 20, Some(1u8)).is_err());
    assert!(grid.cells().iter().all(Option::is_none));
}

#[test]
fn test_grid_is_occupied() {
    let mut grid = Grid::new(10, 20);

    assert!(!grid.is_occupied(5, 10));
    grid.set(5, 10, Some(Block::new(5, 10, Color::Red))).unwrap();
    assert!(grid.is_occupied(5, 10));

    // Out of bounds is never occupied
    assert!(!grid.is_occupied(-1, 0));
    assert!(!grid.contains(-1, 0));
}
