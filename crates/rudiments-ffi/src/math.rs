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


//! # Foreign Function Interface (FFI) for Scalar Math
//!
//! C-compatible wrappers for the integer and floating-point operations of
//! `rudiments_core::math`.
//!
//! Infallible functions return their value directly. Fallible functions
//! (`rudiments_divide`, `rudiments_factorial`) return a `RudimentsStatus` and
//! write the result through an out-pointer only when the status is `Ok`.
//!
//! ## Exported API
//!
//! * `rudiments_add`, `rudiments_subtract`, `rudiments_multiply`
//! * `rudiments_divide`
//! * `rudiments_power`
//! * `rudiments_factorial`
//! * `rudiments_is_prime`, `rudiments_is_even`
//! * `rudiments_celsius_to_fahrenheit`

use crate::status::{write_result, RudimentsStatus};
use rudiments_core::math::{arithmetic, prime};

/// Returns `a + b`, wrapping on overflow.
#[no_mangle]
pub extern "C" fn rudiments_add(a: i32, b: i32) -> i32 {
    arithmetic::add(a, b)
}

/// Returns `a - b`, wrapping on overflow.
#[no_mangle]
pub extern "C" fn rudiments_subtract(a: i32, b: i32) -> i32 {
    arithmetic::subtract(a, b)
}

/// Returns `a * b`, wrapping on overflow.
#[no_mangle]
pub extern "C" fn rudiments_multiply(a: i32, b: i32) -> i32 {
    arithmetic::multiply(a, b)
}

/// Divides `a` by `b` and stores the quotient in `out`.
///
/// Returns `RudimentsStatus::InvalidArgument` if `b` is zero, in which case
/// `out` is not written.
///
/// # Panics
///
/// This function will panic if `out` is a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that `out` is valid for writes.
#[no_mangle]
pub unsafe extern "C" fn rudiments_divide(a: f64, b: f64, out: *mut f64) -> RudimentsStatus {
    write_result(arithmetic::divide(a, b), out, "rudiments_divide")
}

/// Raises `base` to the integer power `exponent`.
#[no_mangle]
pub extern "C" fn rudiments_power(base: f64, exponent: i32) -> f64 {
    arithmetic::power(base, exponent)
}

/// Computes `n!` and stores it in `out`.
///
/// Returns `RudimentsStatus::InvalidArgument` if `n` is negative, in which
/// case `out` is not written.
///
/// # Panics
///
/// This function will panic if `out` is a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that `out` is valid for writes.
#[no_mangle]
pub unsafe extern "C" fn rudiments_factorial(n: i32, out: *mut i64) -> RudimentsStatus {
    write_result(arithmetic::factorial(n), out, "rudiments_factorial")
}

/// Returns `true` if `n` is prime.
#[no_mangle]
pub extern "C" fn rudiments_is_prime(n: i32) -> bool {
    prime::is_prime(n)
}

/// Returns `true` if `n` is divisible by two.
#[no_mangle]
pub extern "C" fn rudiments_is_even(n: i32) -> bool {
    arithmetic::is_even(n)
}

/// Converts degrees Celsius to degrees Fahrenheit.
#[no_mangle]
pub extern "C" fn rudiments_celsius_to_fahrenheit(celsius: f64) -> f64 {
    arithmetic::celsius_to_fahrenheit(celsius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_integer_operators_wrap() {
        assert_eq!(rudiments_add(2, 3), 5);
        assert_eq!(rudiments_add(i32::MAX, 1), i32::MIN);
        assert_eq!(rudiments_subtract(i32::MIN, 1), i32::MAX);
        assert_eq!(rudiments_multiply(6, 7), 42);
        assert_eq!(rudiments_multiply(i32::MAX, 2), -2);
    }

    #[test]
    fn test_divide_ok() {
        let mut out = 0.0;
        let status = unsafe { rudiments_divide(6.0, 3.0, &mut out) };
        assert_eq!(status, RudimentsStatus::Ok);
        assert_eq!(out, 2.0);
    }

    #[test]
    fn test_divide_by_zero() {
        let mut out = -1.0;
        let status = unsafe { rudiments_divide(1.0, 0.0, &mut out) };
        assert_eq!(status, RudimentsStatus::InvalidArgument);
        assert_eq!(out, -1.0);
    }

    #[test]
    fn test_power() {
        assert_eq!(rudiments_power(2.0, 10), 1024.0);
        assert_eq!(rudiments_power(2.0, -2), 0.25);
        assert_eq!(rudiments_power(0.0, -1), f64::INFINITY);
    }

    #[test]
    fn test_factorial() {
        let mut out = 0_i64;
        assert_eq!(
            unsafe { rudiments_factorial(5, &mut out) },
            RudimentsStatus::Ok
        );
        assert_eq!(out, 120);

        assert_eq!(
            unsafe { rudiments_factorial(-1, &mut out) },
            RudimentsStatus::InvalidArgument
        );
        assert_eq!(out, 120);
    }

    #[test]
    fn test_predicates_and_conversion() {
        assert!(rudiments_is_prime(97));
        assert!(!rudiments_is_prime(100));
        assert!(rudiments_is_even(-2));
        assert!(!rudiments_is_even(3));
        assert_relative_eq!(rudiments_celsius_to_fahrenheit(100.0), 212.0);
    }
}
