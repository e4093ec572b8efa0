//! Game-of-Life generation with B3/S23 rules.

use rayon::prelude::*;

use super::grid::{count_neighbors, Grid};
use crate::error::Result;

/// B3/S23 rules:
/// - Birth: a dead cell with exactly 3 neighbors becomes alive
/// - Survival: a live cell with 2 or 3 neighbors survives
#[inline]
pub fn apply_conway_rules(alive: bool, neighbors: u8) -> bool {
    if alive {
        neighbors == 2 || neighbors == 3
    } else {
        neighbors == 3
    }
}

/// Compute the next generation of `grid`.
///
/// Every neighbor count reads the input snapshot; rows are filled in parallel
/// into a fresh buffer, so the result does not depend on scheduling.
pub fn next_generation(grid: &Grid) -> Grid {
    let cols = grid.cols();
    let mut next_cells = vec![false; grid.cells().len()];

    next_cells
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(row, out)| {
            for (col, cell) in out.iter_mut().enumerate() {
                let neighbors = count_neighbors(grid, row, col);
                *cell = apply_conway_rules(grid.get(row, col), neighbors);
            }
        });

    Grid::from_cells(grid.rows(), cols, next_cells)
}

/// Nested-row entry point. Ragged input fails with `ShapeMismatch`.
pub fn next_generation_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Vec<Vec<bool>>> {
    let grid = Grid::from_rows(rows)?;
    Ok(next_generation(&grid).to_rows())
}
