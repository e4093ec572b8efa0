//! Engine creation, destruction, and generation queries.

use crate::state::Engine;

/// Creates a new, uninitialized engine and returns an opaque pointer.
///
/// # Safety
/// The returned pointer must eventually be freed with `wl_destroy()`.
#[no_mangle]
pub extern "C" fn wl_create() -> *mut Engine {
    Box::into_raw(Box::new(Engine::new()))
}

/// Destroys an engine and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `wl_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn wl_destroy(ptr: *mut Engine) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the generation counter of an engine.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// Steps since the last (re)initialization, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn wl_get_generation(ptr: *const Engine) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}
