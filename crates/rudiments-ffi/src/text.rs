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


//! # Foreign Function Interface (FFI) for Text Utilities
//!
//! String arguments are NUL-terminated C strings. Input bytes that are not
//! valid UTF-8 are replaced with U+FFFD before processing.
//!
//! Strings returned by this module are allocated by Rust and must be released
//! with `rudiments_string_free`; they must not be passed to the C allocator.

use libc::c_char;
use rudiments_core::text;
use std::borrow::Cow;
use std::ffi::{CStr, CString};

/// Borrows a C string as UTF-8, replacing invalid sequences.
///
/// # Safety
///
/// `ptr` must be a valid, NUL-terminated string that outlives `'a`.
#[inline]
unsafe fn str_arg<'a>(ptr: *const c_char, fn_name: &'static str) -> Cow<'a, str> {
    assert!(!ptr.is_null(), "called `{}` with null pointer", fn_name);
    CStr::from_ptr(ptr).to_string_lossy()
}

/// Reverses the characters of `s` and returns a newly allocated C string.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// `s` must point to a valid NUL-terminated string. The returned pointer
/// must be freed with `rudiments_string_free`.
#[no_mangle]
pub unsafe extern "C" fn rudiments_reverse_string(s: *const c_char) -> *mut c_char {
    let input = str_arg(s, "rudiments_reverse_string");
    let reversed = text::reverse_string(&input);

    // The input came from a C string, so it has no interior NUL bytes.
    CString::new(reversed)
        .expect("`CString::new` should not fail")
        .into_raw()
}

/// Frees a string returned by this library.
///
/// # Safety
///
/// `ptr` must have been returned by a `rudiments_*` function that allocates
/// strings and must not be used after this call. Passing null is a no-op.
#[no_mangle]
pub unsafe extern "C" fn rudiments_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Checks whether `s` is a palindrome, ignoring case and non-alphanumerics.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// `s` must point to a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn rudiments_is_palindrome(s: *const c_char) -> bool {
    text::is_palindrome(&str_arg(s, "rudiments_is_palindrome"))
}

/// Counts the whitespace-separated words in `s`.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// `s` must point to a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn rudiments_count_words(s: *const c_char) -> usize {
    text::count_words(&str_arg(s, "rudiments_count_words"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr::null_mut;

    unsafe fn reverse(input: &CStr) -> String {
        let ptr = rudiments_reverse_string(input.as_ptr());
        assert!(!ptr.is_null());
        let out = CStr::from_ptr(ptr).to_string_lossy().into_owned();
        rudiments_string_free(ptr);
        out
    }

    #[test]
    fn test_reverse_string() {
        unsafe {
            assert_eq!(reverse(c"abc"), "cba");
            assert_eq!(reverse(c""), "");
            assert_eq!(reverse(c"größe"), "eßörg");
        }
    }

    #[test]
    fn test_reverse_string_invalid_utf8_is_replaced() {
        let bytes: &[u8] = b"a\xffb\0";
        let input = CStr::from_bytes_with_nul(bytes).unwrap();
        unsafe {
            assert_eq!(reverse(input), "b\u{FFFD}a");
        }
    }

    #[test]
    fn test_string_free_null_is_noop() {
        unsafe {
            rudiments_string_free(null_mut());
        }
    }

    #[test]
    fn test_is_palindrome() {
        unsafe {
            assert!(rudiments_is_palindrome(c"No 'x' in Nixon".as_ptr()));
            assert!(!rudiments_is_palindrome(c"rudiments".as_ptr()));
        }
    }

    #[test]
    fn test_count_words() {
        unsafe {
            assert_eq!(rudiments_count_words(c"".as_ptr()), 0);
            assert_eq!(rudiments_count_words(c" one two  three ".as_ptr()), 3);
        }
    }
}
