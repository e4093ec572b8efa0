//! Error types for the engine.
//!
//! All fallible operations in this crate return [`EngineError`] through the
//! [`Result`] alias.

/// Errors raised by the engine, the evolvers and the shell configuration.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Requested grid has a zero dimension.
    #[error("invalid grid dimensions {rows}x{cols}: both must be at least 1")]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// Nested rows handed to an evolver are ragged.
    #[error("row {row} has {found} cells, expected {expected}")]
    ShapeMismatch {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// Operation requires an initialized grid.
    #[error("engine has not been initialized")]
    Uninitialized,

    /// Unrecognized automaton mode name.
    #[error("unknown automaton mode: {0}")]
    UnknownMode(String),

    /// Unrecognized speed tier name.
    #[error("unknown speed setting: {0}")]
    UnknownSpeed(String),

    /// Unrecognized zoom level.
    #[error("unknown zoom level: {0}")]
    UnknownZoom(String),

    /// Shell configuration file could not be read.
    #[error("failed to read shell config: {0}")]
    Io(#[from] std::io::Error),

    /// Shell configuration could not be parsed.
    #[error("failed to parse shell config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EngineError>;
