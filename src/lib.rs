//! Wolfram Life - dual cellular automaton engine
//!
//! A one-dimensional Wolfram automaton writes a new row into the bottom of a
//! grid every step, and the whole grid then takes one Game-of-Life
//! generation. The library exposes the engine to Rust shells directly and to
//! other languages through a C ABI.

pub mod automaton;
pub mod cadence;
pub mod config;
pub mod driver;
pub mod error;
pub mod ffi;
pub mod state;

#[cfg(test)]
mod tests;

pub use automaton::{Grid, Mode, RuleTable};
pub use cadence::{Cadence, Speed};
pub use config::{ShellConfig, Zoom};
pub use driver::Simulation;
pub use error::{EngineError, Result};
pub use state::{Engine, EngineState};
