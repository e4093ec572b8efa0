//! Mode, rule, and size changes.

use super::{status, WL_ERR_INVALID_DIMENSIONS, WL_ERR_NULL, WL_ERR_UNKNOWN_MODE, WL_OK};
use crate::automaton::Mode;
use crate::state::Engine;

/// Switches mode; the rule code resets to the mode default and an
/// initialized grid is reseeded.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine
///
/// # Returns
/// 0 on success, 1 on null pointer, 4 on an unknown mode.
#[no_mangle]
pub unsafe extern "C" fn wl_set_mode(ptr: *mut Engine, mode: u8) -> i32 {
    if ptr.is_null() {
        return WL_ERR_NULL;
    }
    let Some(mode) = Mode::from_raw(mode) else {
        return WL_ERR_UNKNOWN_MODE;
    };

    (*ptr).set_mode(mode);
    WL_OK
}

/// Current mode (0 = elementary, 1 = totalistic), or 0 if null.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn wl_get_mode(ptr: *const Engine) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).mode().to_raw()
}

/// Replaces the rule code within the current mode.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine
///
/// # Returns
/// 0 on success, 1 on null pointer.
#[no_mangle]
pub unsafe extern "C" fn wl_set_rule_code(ptr: *mut Engine, rule_code: u32) -> i32 {
    if ptr.is_null() {
        return WL_ERR_NULL;
    }

    (*ptr).set_rule_code(rule_code);
    WL_OK
}

/// Current rule code, or 0 if null.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn wl_get_rule_code(ptr: *const Engine) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).rule_code()
}

/// Re-initializes at a new size, keeping mode and rule.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine
///
/// # Returns
/// 0 on success, 1 on null pointer, 2 on zero or negative dimensions.
#[no_mangle]
pub unsafe extern "C" fn wl_resize(ptr: *mut Engine, rows: i32, cols: i32) -> i32 {
    if ptr.is_null() {
        return WL_ERR_NULL;
    }
    if rows < 1 || cols < 1 {
        return WL_ERR_INVALID_DIMENSIONS;
    }

    status((*ptr).resize(rows as usize, cols as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::{grid, lifecycle};
    use std::ptr;

    #[test]
    fn test_set_mode_resets_rule() {
        unsafe {
            let engine = lifecycle::wl_create();
            grid::wl_initialize(engine, 6, 12, 0, 110);
            grid::wl_step(engine);

            assert_eq!(wl_set_mode(engine, 1), WL_OK);
            assert_eq!(wl_get_mode(engine), 1);
            assert_eq!(wl_get_rule_code(engine), 1935);
            assert_eq!(lifecycle::wl_get_generation(engine), 0);

            assert_eq!(wl_set_mode(engine, 2), WL_ERR_UNKNOWN_MODE);
            assert_eq!(wl_get_mode(engine), 1);

            lifecycle::wl_destroy(engine);
        }
    }

    #[test]
    fn test_set_rule_code() {
        unsafe {
            let engine = lifecycle::wl_create();
            assert_eq!(wl_set_rule_code(engine, 184), WL_OK);
            assert_eq!(wl_get_rule_code(engine), 184);
            lifecycle::wl_destroy(engine);
        }
    }

    #[test]
    fn test_resize() {
        unsafe {
            let engine = lifecycle::wl_create();
            grid::wl_initialize(engine, 6, 12, 0, 30);
            grid::wl_step(engine);

            assert_eq!(wl_resize(engine, 9, 7), WL_OK);
            assert_eq!(grid::wl_rows(engine), 9);
            assert_eq!(grid::wl_cols(engine), 7);
            assert_eq!(lifecycle::wl_get_generation(engine), 0);

            assert_eq!(wl_resize(engine, 0, 7), WL_ERR_INVALID_DIMENSIONS);
            assert_eq!(grid::wl_rows(engine), 9);

            lifecycle::wl_destroy(engine);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            assert_eq!(wl_set_mode(ptr::null_mut(), 0), WL_ERR_NULL);
            assert_eq!(wl_set_rule_code(ptr::null_mut(), 30), WL_ERR_NULL);
            assert_eq!(wl_resize(ptr::null_mut(), 4, 4), WL_ERR_NULL);
            assert_eq!(wl_get_mode(ptr::null()), 0);
            assert_eq!(wl_get_rule_code(ptr::null()), 0);
        }
    }
}
