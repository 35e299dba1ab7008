//! Grid module - fixed-size two-dimensional cell storage
//!
//! The grid is a `columns x rows` container where each cell is either empty or
//! holds a value. Uses a flat, row-major buffer (`row * columns + column`).
//! Coordinates: (column, row) where column grows left to right and row grows
//! top to bottom. Out-of-range coordinates are reported as [`GridError`].

use thiserror::Error;

/// Failure of a grid access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({column}, {row}) is outside the {columns}x{rows} grid")]
    OutOfBounds {
        column: i32,
        row: i32,
        columns: usize,
        rows: usize,
    },
    #[error("a {columns}x{rows} grid has more cells than fit in memory")]
    TooLarge { columns: usize, rows: usize },
}

/// Fixed-size grid of optional cells, never resized after creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    columns: usize,
    rows: usize,
    /// Flat array of cells, row-major order (row * columns + column)
    cells: Vec<Option<T>>,
}

impl<T> Grid<T> {
    /// Create a new grid with every cell empty
    ///
    /// # Panics
    ///
    /// Panics when `columns * rows` overflows `usize`. Use [`Grid::try_new`]
    /// for dimensions that come from outside the program.
    pub fn new(columns: usize, rows: usize) -> Self {
        match Self::try_new(columns, rows) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a new grid with every cell empty, failing when the cell count overflows
    pub fn try_new(columns: usize, rows: usize) -> Result<Self, GridError> {
        let len = columns
            .checked_mul(rows)
            .ok_or(GridError::TooLarge { columns, rows })?;
        let mut cells = Vec::with_capacity(len);
        cells.resize_with(len, || None);
        Ok(Self {
            columns,
            rows,
            cells,
        })
    }

    /// Calculate flat index from (column, row) coordinates
    #[inline(always)]
    fn index(&self, column: i32, row: i32) -> Result<usize, GridError> {
        if !self.contains(column, row) {
            return Err(GridError::OutOfBounds {
                column,
                row,
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(row as usize * self.columns + column as usize)
    }

    /// Width of the grid
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Height of the grid
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Check if (column, row) lies inside the grid
    pub fn contains(&self, column: i32, row: i32) -> bool {
        column >= 0 && row >= 0 && (column as usize) < self.columns && (row as usize) < self.rows
    }

    /// Get the value stored at (column, row), `None` when the cell is empty
    pub fn get(&self, column: i32, row: i32) -> Result<Option<&T>, GridError> {
        let idx = self.index(column, row)?;
        Ok(self.cells[idx].as_ref())
    }

    /// Store `value` at (column, row), or clear the cell when `value` is `None`.
    ///
    /// Returns whatever the cell held before.
    pub fn set(&mut self, column: i32, row: i32, value: Option<T>) -> Result<Option<T>, GridError> {
        let idx = self.index(column, row)?;
        Ok(std::mem::replace(&mut self.cells[idx], value))
    }

    /// Check if position is inside the grid and filled
    pub fn is_occupied(&self, column: i32, row: i32) -> bool {
        matches!(self.get(column, row), Ok(Some(_)))
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Option<T>] {
        &self.cells
    }

    /// Cells of a single row, left to right
    pub fn row(&self, row: usize) -> Option<&[Option<T>]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        Some(&self.cells[start..start + self.columns])
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}
