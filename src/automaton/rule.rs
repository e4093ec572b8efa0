//! Rule tables for the one-dimensional automaton.
//!
//! A rule code is read bit by bit into a table, then reversed so the table
//! lists outcomes from the highest neighborhood index down to index 0.
//! Bits above the family's table size are ignored.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Number of outcomes in an elementary table (every 3-cell pattern).
pub const ELEMENTARY_TABLE_LEN: usize = 8;

/// Number of outcomes in a totalistic table.
///
/// Only counts 0..=3 are reachable with three cells; entries for 4..=6 are
/// carried so that code 1935 keeps its documented table.
pub const TOTALISTIC_TABLE_LEN: usize = 7;

/// Rule family driving the bottom row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    /// Outcome chosen by the 3-bit pattern of left, center, right.
    #[default]
    Elementary,
    /// Outcome chosen by the number of live cells in the neighborhood.
    Totalistic,
}

impl Mode {
    /// Rule code selected when switching into this mode.
    pub fn default_rule(self) -> u32 {
        match self {
            Mode::Elementary => 30,
            Mode::Totalistic => 1935,
        }
    }

    /// Table size for this family.
    pub fn table_len(self) -> usize {
        match self {
            Mode::Elementary => ELEMENTARY_TABLE_LEN,
            Mode::Totalistic => TOTALISTIC_TABLE_LEN,
        }
    }

    /// Stable code used across the C ABI.
    pub fn to_raw(self) -> u8 {
        match self {
            Mode::Elementary => 0,
            Mode::Totalistic => 1,
        }
    }

    /// Inverse of [`Mode::to_raw`].
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Mode::Elementary),
            1 => Some(Mode::Totalistic),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Elementary => f.write_str("ELEMENTARY"),
            Mode::Totalistic => f.write_str("TOTALISTIC"),
        }
    }
}

impl FromStr for Mode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ELEMENTARY" => Ok(Mode::Elementary),
            "TOTALISTIC" => Ok(Mode::Totalistic),
            _ => Err(EngineError::UnknownMode(s.to_string())),
        }
    }
}

/// Outcome table derived from a rule code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    mode: Mode,
    entries: Vec<bool>,
}

impl RuleTable {
    /// Derive the table for the given family.
    pub fn for_mode(mode: Mode, code: u32) -> Self {
        match mode {
            Mode::Elementary => derive_elementary(code),
            Mode::Totalistic => derive_totalistic(code),
        }
    }

    /// Family this table belongs to.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Entries, highest neighborhood index first.
    pub fn as_slice(&self) -> &[bool] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<usize> for RuleTable {
    type Output = bool;

    fn index(&self, position: usize) -> &bool {
        &self.entries[position]
    }
}

fn derive(mode: Mode, code: u32) -> RuleTable {
    let mut entries: Vec<bool> = (0..mode.table_len())
        .map(|bit| (code >> bit) & 1 == 1)
        .collect();
    entries.reverse();
    RuleTable { mode, entries }
}

/// Elementary table: position `i` holds bit `7 - i` of `code`.
pub fn derive_elementary(code: u32) -> RuleTable {
    derive(Mode::Elementary, code)
}

/// Totalistic table: position `i` holds bit `6 - i` of `code`.
pub fn derive_totalistic(code: u32) -> RuleTable {
    derive(Mode::Totalistic, code)
}

/// A named rule offered to the shell's selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RulePreset {
    pub label: &'static str,
    pub code: u32,
    pub mode: Mode,
}

/// Built-in presets, in selector order.
pub static PRESETS: [RulePreset; 5] = [
    RulePreset {
        label: "Rule 30",
        code: 30,
        mode: Mode::Elementary,
    },
    RulePreset {
        label: "Rule 90",
        code: 90,
        mode: Mode::Elementary,
    },
    RulePreset {
        label: "Rule 110",
        code: 110,
        mode: Mode::Elementary,
    },
    RulePreset {
        label: "Rule 184",
        code: 184,
        mode: Mode::Elementary,
    },
    RulePreset {
        label: "Code 1935",
        code: 1935,
        mode: Mode::Totalistic,
    },
];

/// Presets belonging to one family.
pub fn presets_for(mode: Mode) -> impl Iterator<Item = &'static RulePreset> {
    PRESETS.iter().filter(move |preset| preset.mode == mode)
}

/// Label of a preset code, if the code is one of the built-ins.
pub fn preset_label(code: u32) -> Option<&'static str> {
    PRESETS
        .iter()
        .find(|preset| preset.code == code)
        .map(|preset| preset.label)
}

/// One legend tile: the neighborhood drawn on top, the outcome below.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RulePattern {
    pub pattern: [bool; 3],
    pub result: bool,
}

/// Legend shown next to the rule selector, highest index first.
///
/// Totalistic tiles draw a count `i` as the first `i` cells lit, so counts
/// above 3 render as a full tile.
pub fn rule_legend(mode: Mode, code: u32) -> Vec<RulePattern> {
    (0..mode.table_len())
        .rev()
        .map(|i| {
            let pattern = match mode {
                Mode::Elementary => [i & 4 != 0, i & 2 != 0, i & 1 != 0],
                Mode::Totalistic => [0 < i, 1 < i, 2 < i],
            };
            RulePattern {
                pattern,
                result: (code >> i) & 1 == 1,
            }
        })
        .collect()
}
