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


//! Scalar arithmetic with fixed-width integer and IEEE-754 semantics.
//!
//! The integer operators wrap on overflow in every build profile. The
//! floating-point operators follow IEEE-754; infinities and NaN are ordinary
//! results. Only true precondition violations (a zero divisor, a negative
//! factorial argument) are reported as `InvalidArgumentError`.

use crate::error::InvalidArgumentError;
use crate::num::ops::wrapping_arithmetic::{WrappingAddVal, WrappingMulVal, WrappingSubVal};

/// Returns `a + b`, wrapping on overflow.
///
/// # Examples
///
/// ```rust
/// # use rudiments_core::math::arithmetic::add;
/// assert_eq!(add(2, 3), 5);
/// assert_eq!(add(i32::MAX, 1), i32::MIN);
/// ```
#[inline]
pub fn add<T>(a: T, b: T) -> T
where
    T: WrappingAddVal,
{
    a.wrapping_add_val(b)
}

/// Returns `a - b`, wrapping on overflow.
///
/// # Examples
///
/// ```rust
/// # use rudiments_core::math::arithmetic::subtract;
/// assert_eq!(subtract(10, 4), 6);
/// assert_eq!(subtract(i32::MIN, 1), i32::MAX);
/// ```
#[inline]
pub fn subtract<T>(a: T, b: T) -> T
where
    T: WrappingSubVal,
{
    a.wrapping_sub_val(b)
}

/// Returns `a * b`, wrapping on overflow.
///
/// # Examples
///
/// ```rust
/// # use rudiments_core::math::arithmetic::multiply;
/// assert_eq!(multiply(6, 7), 42);
/// assert_eq!(multiply(i32::MAX, 2), -2);
/// ```
#[inline]
pub fn multiply<T>(a: T, b: T) -> T
where
    T: WrappingMulVal,
{
    a.wrapping_mul_val(b)
}

/// Divides `a` by `b`.
///
/// # Errors
///
/// Returns `InvalidArgumentError::DivisionByZero` when `b` compares equal to
/// zero. There is no epsilon tolerance: tiny non-zero divisors are accepted
/// and may produce infinities.
///
/// # Examples
///
/// ```rust
/// # use rudiments_core::math::arithmetic::divide;
/// # use rudiments_core::error::InvalidArgumentError;
/// assert_eq!(divide(6.0, 3.0), Ok(2.0));
/// assert_eq!(divide(1.0, 0.0), Err(InvalidArgumentError::DivisionByZero));
/// ```
#[inline]
pub fn divide(a: f64, b: f64) -> Result<f64, InvalidArgumentError> {
    if b == 0.0 {
        return Err(InvalidArgumentError::DivisionByZero);
    }
    Ok(a / b)
}

/// Raises `base` to the integer power `exponent` by repeated multiplication.
///
/// Runs in `O(|exponent|)`. A negative exponent yields the reciprocal of the
/// positive power, so `power(0.0, -1)` is `+inf` rather than an error.
/// `exponent == 0` always yields `1.0`.
///
/// # Examples
///
/// ```rust
/// # use rudiments_core::math::arithmetic::power;
/// assert_eq!(power(2.0, 10), 1024.0);
/// assert_eq!(power(2.0, -2), 0.25);
/// assert_eq!(power(0.0, 0), 1.0);
/// ```
pub fn power(base: f64, exponent: i32) -> f64 {
    let mut result = 1.0;
    for _ in 0..exponent.unsigned_abs() {
        result *= base;
    }

    if exponent < 0 {
        1.0 / result
    } else {
        result
    }
}

/// Computes `n!` as a 64-bit integer.
///
/// The product is accumulated from 2 up to `n` with wrapping multiplication;
/// results above `20!` silently wrap.
///
/// # Errors
///
/// Returns `InvalidArgumentError::NegativeFactorial` if `n < 0`.
///
/// # Examples
///
/// ```rust
/// # use rudiments_core::math::arithmetic::factorial;
/// assert_eq!(factorial(0), Ok(1));
/// assert_eq!(factorial(5), Ok(120));
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i32) -> Result<i64, InvalidArgumentError> {
    if n < 0 {
        return Err(InvalidArgumentError::NegativeFactorial { n });
    }

    Ok((2..=i64::from(n)).fold(1_i64, |acc, i| acc.wrapping_mul_val(i)))
}

/// Returns `true` if `n` is divisible by two.
#[inline]
pub fn is_even(n: i32) -> bool {
    n % 2 == 0
}

/// Converts a temperature from degrees Celsius to degrees Fahrenheit.
#[inline]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}
