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


//! # Rudiments Core
//!
//! Small, pure utility functions over integers, floating-point numbers,
//! strings and slices. Every function is referentially transparent: it never
//! mutates its inputs, holds no state, and is safe to call from any thread.
//!
//! ## Modules
//!
//! - `error`: `InvalidArgumentError`, returned when a precondition is
//!   violated (zero divisor, negative factorial argument, empty input).
//! - `num`: By-value wrapping arithmetic traits (`WrappingAddVal`,
//!   `WrappingSubVal`, `WrappingMulVal`, `WrappingNegVal`) that pin integer
//!   overflow to two's complement wrap-around in every build profile.
//! - `math`: Scalar operations: `add`, `subtract`, `multiply`, `divide`,
//!   `power`, `factorial`, `is_prime`, `is_even`, `celsius_to_fahrenheit`
//!   and `fibonacci`.
//! - `text`: `reverse_string`, `is_palindrome`, `count_words`.
//! - `stats`: `calculate_average`, `find_max` and `calculate_statistics`
//!   over float slices.
//! - `algorithm`: `merge_sorted` two-pointer merge and `is_sorted_ascending`.
//!
//! ## Numeric semantics
//!
//! Integer overflow and IEEE-754 infinities or NaN are never errors; they are
//! returned as ordinary values exactly as fixed-width hardware arithmetic
//! produces them. Only precondition violations are reported through
//! `Result`.
//!
//! The most common functions are re-exported at the crate root:
//!
//! ```rust
//! use rudiments_core::{factorial, merge_sorted, power, reverse_string};
//!
//! assert_eq!(factorial(5), Ok(120));
//! assert_eq!(power(2.0, -2), 0.25);
//! assert_eq!(reverse_string("abc"), "cba");
//! assert_eq!(merge_sorted(&[1, 3], &[2]), vec![1, 2, 3]);
//! ```

pub mod algorithm;
pub mod error;
pub mod math;
pub mod num;
pub mod stats;
pub mod text;

pub use algorithm::{is_sorted_ascending, merge_sorted};
pub use error::InvalidArgumentError;
pub use math::arithmetic::{
    add, celsius_to_fahrenheit, divide, factorial, is_even, multiply, power, subtract,
};
pub use math::prime::is_prime;
pub use math::sequence::fibonacci;
pub use stats::{calculate_average, calculate_statistics, find_max, Statistics};
pub use text::{count_words, is_palindrome, reverse_string};
