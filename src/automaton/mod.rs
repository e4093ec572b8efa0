//! Core automaton logic.
//!
//! This module contains the pure pieces of the simulation: rule tables, the
//! 1-D row evolver and the 2-D Game-of-Life evolver. None of them own state;
//! the engine in `state` calls these functions.

pub mod grid;
pub mod row;
pub mod rule;
pub mod stepping;

pub use grid::{count_neighbors, in_bounds, index_of, Grid};
pub use row::{next_row, Row};
pub use rule::{
    derive_elementary, derive_totalistic, preset_label, presets_for, rule_legend, Mode,
    RulePattern, RulePreset, RuleTable, PRESETS,
};
pub use stepping::{apply_conway_rules, next_generation, next_generation_rows};
