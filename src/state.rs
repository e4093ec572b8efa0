//! Engine state: the grid, the active rule and the composite step.

use tracing::{debug, info, trace};

use crate::automaton::{next_generation, next_row, Grid, Mode, RuleTable};
use crate::error::{EngineError, Result};

/// Half-width of the seed pattern written into the bottom row.
const SEED_HALF_WIDTH: isize = 3;

/// Lifecycle of an [`Engine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// No grid has been allocated yet.
    Uninitialized,
    /// A grid exists and `step()` may be called.
    Ready,
}

/// The dual-automaton simulation.
///
/// Owns the grid and the active rule table. Callers only ever see the grid
/// through [`Engine::grid`] or a copy from [`Engine::snapshot`].
#[derive(Clone, Debug)]
pub struct Engine {
    mode: Mode,
    rule_code: u32,
    table: RuleTable,
    grid: Option<Grid>,
    generation: u64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Uninitialized engine set to the elementary default rule.
    pub fn new() -> Self {
        let mode = Mode::default();
        let rule_code = mode.default_rule();
        Engine {
            mode,
            rule_code,
            table: RuleTable::for_mode(mode, rule_code),
            grid: None,
            generation: 0,
        }
    }

    /// Create and initialize in one call.
    pub fn with_grid(rows: usize, cols: usize, mode: Mode, rule_code: u32) -> Result<Self> {
        let mut engine = Engine::new();
        engine.initialize(rows, cols, mode, rule_code)?;
        Ok(engine)
    }

    /// Allocate a fresh seeded grid and derive the rule table.
    ///
    /// On `InvalidDimensions` nothing about the engine changes.
    pub fn initialize(&mut self, rows: usize, cols: usize, mode: Mode, rule_code: u32) -> Result<()> {
        let grid = seeded_grid(rows, cols)?;

        self.mode = mode;
        self.rule_code = rule_code;
        self.table = RuleTable::for_mode(mode, rule_code);
        self.grid = Some(grid);
        self.generation = 0;

        info!(rows, cols, %mode, rule_code, "engine initialized");
        Ok(())
    }

    pub fn state(&self) -> EngineState {
        if self.grid.is_some() {
            EngineState::Ready
        } else {
            EngineState::Uninitialized
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state() == EngineState::Ready
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn rule_code(&self) -> u32 {
        self.rule_code
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Composite steps taken since the last (re)initialization.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `(rows, cols)` of the current grid.
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.grid.as_ref().map(|grid| (grid.rows(), grid.cols()))
    }

    /// Read-only view of the current grid.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Owned copy of the current grid for rendering.
    pub fn snapshot(&self) -> Result<Grid> {
        self.grid.clone().ok_or(EngineError::Uninitialized)
    }

    /// Advance one composite generation.
    ///
    /// Order matters: the new bottom row is evolved from the old bottom row,
    /// the rows shift up, the new row is written, and only then does the whole
    /// grid (injected row included) take one Game-of-Life generation.
    pub fn step(&mut self) -> Result<()> {
        let grid = self.grid.as_mut().ok_or(EngineError::Uninitialized)?;

        let injected = next_row(grid.bottom_row(), &self.table, self.mode);
        grid.shift_up();
        let bottom = grid.rows() - 1;
        grid.row_mut(bottom).copy_from_slice(&injected);

        let next = next_generation(grid);
        *grid = next;
        self.generation += 1;

        trace!(generation = self.generation, "engine stepped");
        Ok(())
    }

    /// Switch rule code within the current mode. The grid is left alone.
    pub fn set_rule_code(&mut self, rule_code: u32) {
        self.rule_code = rule_code;
        self.table = RuleTable::for_mode(self.mode, rule_code);
        debug!(mode = %self.mode, rule_code, "rule code changed");
    }

    /// Switch mode. The rule code falls back to the mode's default and a
    /// ready engine is reseeded, since codes do not carry across families.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.rule_code = mode.default_rule();
        self.table = RuleTable::for_mode(mode, self.rule_code);

        if let Some((rows, cols)) = self.dimensions() {
            self.reseed(rows, cols);
        }
        debug!(%mode, rule_code = self.rule_code, "mode changed");
    }

    /// Re-initialize at a new size, keeping mode and rule.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        self.initialize(rows, cols, self.mode, self.rule_code)
    }

    /// Reseed at the current size, keeping mode and rule.
    pub fn reset(&mut self) -> Result<()> {
        let (rows, cols) = self.dimensions().ok_or(EngineError::Uninitialized)?;
        self.reseed(rows, cols);
        Ok(())
    }

    fn reseed(&mut self, rows: usize, cols: usize) {
        // Dimensions come from an existing grid, so they are valid.
        if let Ok(grid) = seeded_grid(rows, cols) {
            self.grid = Some(grid);
            self.generation = 0;
        }
    }
}

/// Write the seed pattern: seven cells centered on `cols / 2` in the bottom
/// row, live at even offsets from the center. Offsets past either edge are
/// skipped.
pub fn seed_bottom_row(grid: &mut Grid) {
    let bottom = grid.rows() - 1;
    let mid = (grid.cols() / 2) as isize;

    for offset in -SEED_HALF_WIDTH..=SEED_HALF_WIDTH {
        let col = mid + offset;
        if col >= 0 && (col as usize) < grid.cols() {
            grid.set(bottom, col as usize, offset % 2 == 0);
        }
    }
}

fn seeded_grid(rows: usize, cols: usize) -> Result<Grid> {
    let mut grid = Grid::new(rows, cols)?;
    seed_bottom_row(&mut grid);
    Ok(grid)
}
