//! C-ABI FFI bindings for cross-language integration.
//!
//! The boundary is JSON in, JSON out: callers pass a request body as
//! accepted by [`crate::convert::handle_json`] and receive the response body
//! together with its status code.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::convert::{self, ErrorResponse};
use crate::error::Error;

/// Result structure returned by FFI functions.
#[repr(C)]
pub struct AbntResult {
    /// Whether the request succeeded (status 200).
    pub success: bool,
    /// Status code of the response.
    pub status: u16,
    /// JSON response body (null only if allocation failed). Must be freed with `abnt_free_result`.
    pub data: *mut c_char,
}

impl AbntResult {
    fn new(status: u16, body: String) -> Self {
        Self {
            success: status == 200,
            status,
            data: CString::new(body).map_or(ptr::null_mut(), CString::into_raw),
        }
    }

    fn error(err: Error) -> Self {
        let body = serde_json::to_string(&ErrorResponse::from(&err)).unwrap_or_default();
        Self::new(err.status_code(), body)
    }
}

/// Format a document from a JSON request.
///
/// # Safety
///
/// The `request` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `abnt_free_result`.
#[no_mangle]
pub unsafe extern "C" fn abnt_format_json(request: *const c_char) -> AbntResult {
    if request.is_null() {
        return AbntResult::error(Error::InvalidRequest("Request cannot be null".to_string()));
    }

    let body = match CStr::from_ptr(request).to_str() {
        Ok(s) => s,
        Err(_) => {
            return AbntResult::error(Error::InvalidRequest("Invalid UTF-8 request".to_string()))
        }
    };

    let (status, response) = convert::handle_json(body);
    AbntResult::new(status, response)
}

/// Free a result returned by any abnt function.
///
/// # Safety
///
/// The `result` must have been returned by an abnt function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn abnt_free_result(result: AbntResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
}

/// Get the version of the abnt library.
///
/// # Safety
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn abnt_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
