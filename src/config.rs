//! Settings the presentation shell hands to the engine.
//!
//! Only `mode` and `rule` affect automaton semantics. `speed` feeds the
//! [`Cadence`](crate::cadence::Cadence) throttle and `zoom`/`cell_size` only
//! affect how the shell draws the grid.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::automaton::Mode;
use crate::cadence::Speed;
use crate::error::{EngineError, Result};

/// Default cell edge in canvas pixels at 1x zoom.
pub const DEFAULT_CELL_SIZE: u32 = 5;

/// Composite steps run after every (re)initialization.
pub const DEFAULT_WARMUP_GENERATIONS: u32 = 10;

/// Render scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zoom {
    #[default]
    #[serde(rename = "1x")]
    X1,
    #[serde(rename = "2x")]
    X2,
    #[serde(rename = "3x")]
    X3,
}

impl Zoom {
    pub fn factor(self) -> u32 {
        match self {
            Zoom::X1 => 1,
            Zoom::X2 => 2,
            Zoom::X3 => 3,
        }
    }
}

impl fmt::Display for Zoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.factor())
    }
}

impl FromStr for Zoom {
    type Err = EngineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1x" => Ok(Zoom::X1),
            "2x" => Ok(Zoom::X2),
            "3x" => Ok(Zoom::X3),
            _ => Err(EngineError::UnknownZoom(s.to_string())),
        }
    }
}

/// Shell configuration. Every field has a default, so `{}` is valid JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub mode: Mode,
    /// Rule code; `None` means the mode's default rule.
    pub rule: Option<u32>,
    pub speed: Speed,
    pub zoom: Zoom,
    /// Steps run right after the grid is (re)seeded.
    pub warmup_generations: u32,
    /// Canvas pixels per cell, before zoom.
    pub cell_size: u32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            mode: Mode::default(),
            rule: None,
            speed: Speed::default(),
            zoom: Zoom::default(),
            warmup_generations: DEFAULT_WARMUP_GENERATIONS,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl ShellConfig {
    /// Parse from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if the string is not a valid config.
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Io`] if the file cannot be read, or
    /// [`EngineError::Config`] if its content is not a valid config.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Effective rule code for the configured mode.
    pub fn rule_code(&self) -> u32 {
        self.rule.unwrap_or_else(|| self.mode.default_rule())
    }

    /// Grid `(rows, cols)` that fit a canvas. Zoom does not change this.
    pub fn grid_dimensions(&self, canvas_width: u32, canvas_height: u32) -> (usize, usize) {
        let cell = self.cell_size.max(1);
        ((canvas_height / cell) as usize, (canvas_width / cell) as usize)
    }

    /// On-screen distance between neighboring cells, zoom applied.
    pub fn cell_pitch(&self) -> u32 {
        self.cell_size * self.zoom.factor()
    }
}
