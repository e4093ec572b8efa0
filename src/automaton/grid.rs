//! Grid storage and cell access helpers.

use crate::error::{EngineError, Result};

/// Row-major boolean matrix. Row 0 is the top, the last row is the one the
/// 1-D automaton writes into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid of the given size.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows < 1 || cols < 1 {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }
        Ok(Grid {
            rows,
            cols,
            cells: vec![false; rows * cols],
        })
    }

    /// Build from nested rows. Ragged input is rejected rather than trimmed.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut grid = Grid::new(rows.len(), cols)?;

        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(EngineError::ShapeMismatch {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            grid.row_mut(r).copy_from_slice(row);
        }

        Ok(grid)
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Grid { rows, cols, cells }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat row-major view of every cell.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Cell state; out-of-bounds reads are dead.
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col]
        } else {
            false
        }
    }

    /// Set a cell. Out-of-bounds coordinates are silently ignored.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = alive;
        }
    }

    /// Borrow one row.
    ///
    /// # Panics
    /// If `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [bool] {
        let start = row * self.cols;
        &mut self.cells[start..start + self.cols]
    }

    /// The row the 1-D automaton owns.
    pub fn bottom_row(&self) -> &[bool] {
        self.row(self.rows - 1)
    }

    /// Copy out as nested rows, top first.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.cols).map(<[bool]>::to_vec).collect()
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Move every row up by one, discarding the top row. The bottom row keeps
    /// its old content until overwritten.
    pub(crate) fn shift_up(&mut self) {
        self.cells.copy_within(self.cols.., 0);
    }
}

/// Calculate the linear index for a 2D coordinate.
#[inline]
pub fn index_of(grid: &Grid, row: usize, col: usize) -> usize {
    row * grid.cols + col
}

/// Check if signed coordinates are within grid bounds.
#[inline]
pub fn in_bounds(grid: &Grid, row: isize, col: isize) -> bool {
    row >= 0 && (row as usize) < grid.rows && col >= 0 && (col as usize) < grid.cols
}

/// Count alive neighbors in the Moore neighborhood (8 neighbors).
/// Neighbors past the edge do not count; there is no wraparound.
pub fn count_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;

    for dr in -1isize..=1 {
        for dc in -1isize..=1 {
            // Skip the center cell
            if dr == 0 && dc == 0 {
                continue;
            }

            let nr = row as isize + dr;
            let nc = col as isize + dc;

            if in_bounds(grid, nr, nc) && grid.cells[index_of(grid, nr as usize, nc as usize)] {
                count += 1;
            }
        }
    }

    count
}
