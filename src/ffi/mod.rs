//! C FFI layer for non-Rust presentation shells.
//!
//! This module exports C ABI functions over an opaque [`Engine`] handle.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in `state` and `automaton`. These functions are thin
//! wrappers that handle null checks, pointer safety, and error-to-status
//! conversion.
//!
//! [`Engine`]: crate::state::Engine

pub mod grid;
pub mod lifecycle;
pub mod rule;

pub use grid::{wl_cols, wl_get_cell, wl_initialize, wl_rows, wl_snapshot, wl_step};
pub use lifecycle::{wl_create, wl_destroy, wl_get_generation};
pub use rule::{wl_get_mode, wl_get_rule_code, wl_resize, wl_set_mode, wl_set_rule_code};

use crate::error::EngineError;

pub const WL_OK: i32 = 0;
pub const WL_ERR_NULL: i32 = 1;
pub const WL_ERR_INVALID_DIMENSIONS: i32 = 2;
pub const WL_ERR_UNINITIALIZED: i32 = 3;
pub const WL_ERR_UNKNOWN_MODE: i32 = 4;
pub const WL_ERR_CONFIG: i32 = 5;

/// Map an engine error onto its status code.
pub(crate) fn status_of(err: &EngineError) -> i32 {
    match err {
        EngineError::InvalidDimensions { .. } | EngineError::ShapeMismatch { .. } => {
            WL_ERR_INVALID_DIMENSIONS
        }
        EngineError::Uninitialized => WL_ERR_UNINITIALIZED,
        EngineError::UnknownMode(_) => WL_ERR_UNKNOWN_MODE,
        EngineError::UnknownSpeed(_)
        | EngineError::UnknownZoom(_)
        | EngineError::Io(_)
        | EngineError::Config(_) => WL_ERR_CONFIG,
    }
}

pub(crate) fn status(result: crate::error::Result<()>) -> i32 {
    match result {
        Ok(()) => WL_OK,
        Err(err) => status_of(&err),
    }
}
