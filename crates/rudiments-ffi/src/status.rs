// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


//! Status codes returned by fallible FFI entry points.
//!
//! Rust-side `InvalidArgumentError`s cannot cross the C boundary, so every
//! fallible function returns a `RudimentsStatus` and writes its value through
//! an out-pointer only on success. The discarded error detail is emitted as a
//! `tracing` debug event for hosts that install a subscriber.

use libc::c_char;
use rudiments_core::error::InvalidArgumentError;

/// FFI-compatible result status.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RudimentsStatus {
    /// The call succeeded and the out-pointer was written.
    Ok = 0,
    /// A precondition was violated; the out-pointer was left untouched.
    InvalidArgument = 1,
}

impl RudimentsStatus {
    /// Returns the variant name as a static string.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "Ok",
            Self::InvalidArgument => "InvalidArgument",
        }
    }

    #[inline]
    fn as_c_str(&self) -> &'static std::ffi::CStr {
        match self {
            Self::Ok => c"Ok",
            Self::InvalidArgument => c"InvalidArgument",
        }
    }
}

impl From<&InvalidArgumentError> for RudimentsStatus {
    #[inline]
    fn from(_: &InvalidArgumentError) -> Self {
        RudimentsStatus::InvalidArgument
    }
}

impl std::fmt::Display for RudimentsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writes the success value of `result` to `out` and maps the outcome to a status.
///
/// `out` is left untouched on error.
///
/// # Panics
///
/// Panics if `out` is null.
///
/// # Safety
///
/// `out` must be valid for writes of a `T`.
#[inline]
pub(crate) unsafe fn write_result<T>(
    result: Result<T, InvalidArgumentError>,
    out: *mut T,
    fn_name: &'static str,
) -> RudimentsStatus {
    assert!(!out.is_null(), "called `{}` with null pointer", fn_name);

    match result {
        Ok(value) => {
            out.write(value);
            RudimentsStatus::Ok
        }
        Err(err) => {
            tracing::debug!(function = fn_name, error = %err, "rejected invalid argument");
            RudimentsStatus::from(&err)
        }
    }
}

/// Returns a static, NUL-terminated name for `status`.
///
/// The returned pointer is valid for the lifetime of the program and must
/// not be freed.
#[no_mangle]
pub extern "C" fn rudiments_status_name(status: RudimentsStatus) -> *const c_char {
    status.as_c_str().as_ptr()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_status_discriminants_are_stable() {
        assert_eq!(RudimentsStatus::Ok as i32, 0);
        assert_eq!(RudimentsStatus::InvalidArgument as i32, 1);
    }

    #[test]
    fn test_status_from_error() {
        assert_eq!(
            RudimentsStatus::from(&InvalidArgumentError::DivisionByZero),
            RudimentsStatus::InvalidArgument
        );
    }

    #[test]
    fn test_status_name() {
        let ok = unsafe { CStr::from_ptr(rudiments_status_name(RudimentsStatus::Ok)) };
        let invalid =
            unsafe { CStr::from_ptr(rudiments_status_name(RudimentsStatus::InvalidArgument)) };
        assert_eq!(ok.to_str(), Ok("Ok"));
        assert_eq!(invalid.to_str(), Ok("InvalidArgument"));
        assert_eq!(RudimentsStatus::InvalidArgument.to_string(), "InvalidArgument");
    }

    #[test]
    fn test_write_result_leaves_out_untouched_on_error() {
        let mut out = 7.0_f64;
        let status = unsafe {
            write_result(
                Err(InvalidArgumentError::DivisionByZero),
                &mut out,
                "test_write_result",
            )
        };
        assert_eq!(status, RudimentsStatus::InvalidArgument);
        assert_eq!(out, 7.0);

        let status = unsafe { write_result(Ok(3.5), &mut out, "test_write_result") };
        assert_eq!(status, RudimentsStatus::Ok);
        assert_eq!(out, 3.5);
    }
}
