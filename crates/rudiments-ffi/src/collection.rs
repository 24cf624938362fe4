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


//! # Foreign Function Interface (FFI) for Collection Utilities
//!
//! Sequences are passed as a `(pointer, length)` pair. A null pointer is
//! accepted only together with a length of zero; any other null pointer is a
//! programming error and aborts the call.
//!
//! ## Exported API
//!
//! * `rudiments_calculate_average`
//! * `rudiments_find_max`
//! * `rudiments_merge_sorted`

use crate::status::{write_result, RudimentsStatus};
use rudiments_core::{algorithm, stats};

/// Borrows a `(pointer, length)` pair as a slice.
///
/// # Safety
///
/// When `len > 0`, `ptr` must be valid for reads of `len` elements for `'a`.
#[inline]
unsafe fn slice_arg<'a, T>(ptr: *const T, len: usize, fn_name: &'static str) -> &'a [T] {
    if len == 0 {
        return &[];
    }

    assert!(!ptr.is_null(), "called `{}` with null pointer", fn_name);
    std::slice::from_raw_parts(ptr, len)
}

/// Computes the arithmetic mean of `len` values and stores it in `out`.
///
/// Returns `RudimentsStatus::InvalidArgument` if `len` is zero, in which case
/// `out` is not written.
///
/// # Panics
///
/// This function will panic if `out` is null, or if `values` is null while
/// `len` is non-zero.
///
/// # Safety
///
/// `values` must be valid for reads of `len` elements and `out` must be valid
/// for writes.
#[no_mangle]
pub unsafe extern "C" fn rudiments_calculate_average(
    values: *const f64,
    len: usize,
    out: *mut f64,
) -> RudimentsStatus {
    let values = slice_arg(values, len, "rudiments_calculate_average");
    write_result(
        stats::calculate_average(values),
        out,
        "rudiments_calculate_average",
    )
}

/// Finds the largest of `len` values and stores it in `out`.
///
/// Returns `RudimentsStatus::InvalidArgument` if `len` is zero, in which case
/// `out` is not written.
///
/// # Panics
///
/// This function will panic if `out` is null, or if `values` is null while
/// `len` is non-zero.
///
/// # Safety
///
/// `values` must be valid for reads of `len` elements and `out` must be valid
/// for writes.
#[no_mangle]
pub unsafe extern "C" fn rudiments_find_max(
    values: *const f64,
    len: usize,
    out: *mut f64,
) -> RudimentsStatus {
    let values = slice_arg(values, len, "rudiments_find_max");
    write_result(stats::find_max(values), out, "rudiments_find_max")
}

/// Merges two ascending sequences into the caller-provided buffer `out`.
///
/// Returns the number of elements written, which is always `a_len + b_len`.
///
/// # Panics
///
/// This function will panic if `out_capacity` is smaller than
/// `a_len + b_len`, or if any pointer is null while its length is non-zero.
///
/// # Safety
///
/// `a` and `b` must be valid for reads of `a_len` and `b_len` elements, and
/// `out` must be valid for writes of `out_capacity` elements. `out` must not
/// overlap either input.
#[no_mangle]
pub unsafe extern "C" fn rudiments_merge_sorted(
    a: *const i32,
    a_len: usize,
    b: *const i32,
    b_len: usize,
    out: *mut i32,
    out_capacity: usize,
) -> usize {
    let a = slice_arg(a, a_len, "rudiments_merge_sorted");
    let b = slice_arg(b, b_len, "rudiments_merge_sorted");

    let required = a.len() + b.len();
    assert!(
        out_capacity >= required,
        "called `rudiments_merge_sorted` with an output buffer that is too small: the capacity is {} but {} elements are required",
        out_capacity,
        required
    );

    if required == 0 {
        return 0;
    }

    assert!(
        !out.is_null(),
        "called `rudiments_merge_sorted` with null pointer"
    );

    let merged = algorithm::merge_sorted(a, b);
    std::ptr::copy_nonoverlapping(merged.as_ptr(), out, merged.len());
    merged.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr::{null, null_mut};

    #[test]
    fn test_calculate_average() {
        let values = [2.0, 4.0, 6.0];
        let mut out = 0.0;
        let status =
            unsafe { rudiments_calculate_average(values.as_ptr(), values.len(), &mut out) };
        assert_eq!(status, RudimentsStatus::Ok);
        assert_eq!(out, 4.0);
    }

    #[test]
    fn test_calculate_average_empty() {
        let mut out = 1.5;
        let status = unsafe { rudiments_calculate_average(null(), 0, &mut out) };
        assert_eq!(status, RudimentsStatus::InvalidArgument);
        assert_eq!(out, 1.5);
    }

    #[test]
    fn test_find_max() {
        let values = [3.0, 1.0, 7.0, 2.0];
        let mut out = 0.0;
        let status = unsafe { rudiments_find_max(values.as_ptr(), values.len(), &mut out) };
        assert_eq!(status, RudimentsStatus::Ok);
        assert_eq!(out, 7.0);
    }

    #[test]
    fn test_find_max_empty() {
        let mut out = 0.0;
        let status = unsafe { rudiments_find_max(null(), 0, &mut out) };
        assert_eq!(status, RudimentsStatus::InvalidArgument);
    }

    #[test]
    fn test_merge_sorted() {
        let a = [1, 3, 5];
        let b = [2, 4, 6];
        let mut out = [0_i32; 8];
        let written = unsafe {
            rudiments_merge_sorted(
                a.as_ptr(),
                a.len(),
                b.as_ptr(),
                b.len(),
                out.as_mut_ptr(),
                out.len(),
            )
        };
        assert_eq!(written, 6);
        assert_eq!(&out[..written], &[1, 2, 3, 4, 5, 6]);
        assert_eq!(&out[written..], &[0, 0]);
    }

    #[test]
    fn test_merge_sorted_with_empty_input() {
        let b = [1, 2];
        let mut out = [0_i32; 2];
        let written = unsafe {
            rudiments_merge_sorted(null(), 0, b.as_ptr(), b.len(), out.as_mut_ptr(), out.len())
        };
        assert_eq!(written, 2);
        assert_eq!(out, [1, 2]);
    }

    #[test]
    fn test_merge_sorted_all_empty_accepts_null_output() {
        let written = unsafe { rudiments_merge_sorted(null(), 0, null(), 0, null_mut(), 0) };
        assert_eq!(written, 0);
    }
}
