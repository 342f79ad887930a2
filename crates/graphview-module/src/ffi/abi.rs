//! FFI ABI definitions for shared-library modules.
//!
//! A module library exports these functions:
//!
//! ```c
//! const char* graphview_module_key(void);
//! const char* graphview_module_name(void);
//! void*       graphview_module_new(void);
//! char*       graphview_module_convert(void* instance, const char* input);
//! void        graphview_module_free_string(char* output);
//! void        graphview_module_drop(void* instance);
//! ```
//!
//! `key` and `name` return static strings. `new` returns NULL on failure.
//! `convert` returns NULL on failure; a non-NULL result is owned by the
//! library and released through `free_string`.

use std::os::raw::{c_char, c_void};

/// Format type key symbol.
pub const KEY_SYMBOL: &[u8] = b"graphview_module_key\0";
/// Display name symbol.
pub const NAME_SYMBOL: &[u8] = b"graphview_module_name\0";
/// Instance constructor symbol.
pub const NEW_SYMBOL: &[u8] = b"graphview_module_new\0";
/// Conversion entry point symbol.
pub const CONVERT_SYMBOL: &[u8] = b"graphview_module_convert\0";
/// Output deallocator symbol.
pub const FREE_STRING_SYMBOL: &[u8] = b"graphview_module_free_string\0";
/// Instance destructor symbol.
pub const DROP_SYMBOL: &[u8] = b"graphview_module_drop\0";

/// Returns a static, NUL-terminated string.
pub type ModuleStringFn = unsafe extern "C" fn() -> *const c_char;

/// Creates a module instance.
pub type ModuleNewFn = unsafe extern "C" fn() -> *mut c_void;

/// Converts NUL-terminated input into NUL-terminated output.
pub type ModuleConvertFn =
    unsafe extern "C" fn(instance: *mut c_void, input: *const c_char) -> *mut c_char;

/// Releases a string returned by the convert function.
pub type ModuleFreeStringFn = unsafe extern "C" fn(output: *mut c_char);

/// Destroys a module instance.
pub type ModuleDropFn = unsafe extern "C" fn(instance: *mut c_void);
