//! One-dimensional row evolution with toroidal wraparound.

use tracing::debug;

use super::rule::{Mode, RuleTable};

/// A single automaton row, index 0 on the left.
pub type Row = Vec<bool>;

/// Pack a neighborhood into its 3-bit index (left is the high bit).
#[inline]
pub fn neighborhood_index(left: bool, center: bool, right: bool) -> usize {
    (left as usize) << 2 | (center as usize) << 1 | right as usize
}

/// Apply the rule to one neighborhood. The table's own family picks the
/// lookup, so every index stays inside the table.
#[inline]
fn apply_rule(left: bool, center: bool, right: bool, table: &RuleTable) -> bool {
    match table.mode() {
        // Tables are stored highest pattern first.
        Mode::Elementary => {
            let idx = neighborhood_index(left, center, right);
            table[table.len() - 1 - idx]
        }
        Mode::Totalistic => {
            let sum = left as usize + center as usize + right as usize;
            table[sum]
        }
    }
}

/// Produce the next row. Both ends wrap, so column 0's left neighbor is the
/// last column.
///
/// `mode` is expected to match `table.mode()`. When it does not, the table
/// wins: a table only knows how to answer for its own family.
pub fn next_row(current: &[bool], table: &RuleTable, mode: Mode) -> Row {
    if mode != table.mode() {
        debug!(requested = %mode, table = %table.mode(), "mode differs from rule table, using table");
    }
    let len = current.len();
    (0..len)
        .map(|i| {
            let left = current[(i + len - 1) % len];
            let center = current[i];
            let right = current[(i + 1) % len];
            apply_rule(left, center, right, table)
        })
        .collect()
}
