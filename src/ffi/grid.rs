//! Grid initialization, stepping, and read-out.

use super::{status, WL_ERR_INVALID_DIMENSIONS, WL_ERR_NULL, WL_ERR_UNKNOWN_MODE};
use crate::automaton::Mode;
use crate::state::Engine;

/// Initializes the engine with a seeded grid.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine
///
/// # Returns
/// 0 on success, 1 on null pointer, 2 on zero or negative dimensions,
/// 4 on an unknown mode. The engine is unchanged on failure.
#[no_mangle]
pub unsafe extern "C" fn wl_initialize(
    ptr: *mut Engine,
    rows: i32,
    cols: i32,
    mode: u8,
    rule_code: u32,
) -> i32 {
    if ptr.is_null() {
        return WL_ERR_NULL;
    }
    if rows < 1 || cols < 1 {
        return WL_ERR_INVALID_DIMENSIONS;
    }
    let Some(mode) = Mode::from_raw(mode) else {
        return WL_ERR_UNKNOWN_MODE;
    };

    let engine = &mut *ptr;
    status(engine.initialize(rows as usize, cols as usize, mode, rule_code))
}

/// Advances one composite generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine
///
/// # Returns
/// 0 on success, 1 on null pointer, 3 if the engine is not initialized.
#[no_mangle]
pub unsafe extern "C" fn wl_step(ptr: *mut Engine) -> i32 {
    if ptr.is_null() {
        return WL_ERR_NULL;
    }

    let engine = &mut *ptr;
    status(engine.step())
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine
///
/// # Returns
/// 0 if out of bounds, uninitialized, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn wl_get_cell(ptr: *const Engine, row: i32, col: i32) -> u8 {
    if ptr.is_null() || row < 0 || col < 0 {
        return 0;
    }

    let engine = &*ptr;
    match engine.grid() {
        Some(grid) => grid.get(row as usize, col as usize) as u8,
        None => 0,
    }
}

/// Row count, or 0 if uninitialized or null.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn wl_rows(ptr: *const Engine) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).dimensions().map_or(0, |(rows, _)| rows as u32)
}

/// Column count, or 0 if uninitialized or null.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn wl_cols(ptr: *const Engine) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).dimensions().map_or(0, |(_, cols)| cols as u32)
}

/// Copies the grid into a caller-provided buffer, row-major, one byte per
/// cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine
/// - `out_buffer` must be valid for writes of `buffer_len` bytes
///
/// # Returns
/// Number of bytes written: rows * cols, or 0 on null pointers, an
/// uninitialized engine, or a buffer too small for the whole grid.
#[no_mangle]
pub unsafe extern "C" fn wl_snapshot(
    ptr: *const Engine,
    out_buffer: *mut u8,
    buffer_len: usize,
) -> usize {
    if ptr.is_null() || out_buffer.is_null() {
        return 0;
    }

    let engine = &*ptr;
    let Some(grid) = engine.grid() else {
        return 0;
    };

    let cells = grid.cells();
    if buffer_len < cells.len() {
        return 0;
    }

    let out = std::slice::from_raw_parts_mut(out_buffer, cells.len());
    for (dst, &alive) in out.iter_mut().zip(cells) {
        *dst = alive as u8;
    }
    cells.len()
}
