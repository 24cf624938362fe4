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


//! # Descriptive Statistics
//!
//! Summaries over non-empty slices of floating-point values.
//!
//! All functions reject an empty slice with
//! `InvalidArgumentError::EmptyInput` before looking at the data. Sums are
//! accumulated naively from left to right; no compensated (Kahan) summation
//! is performed, so results carry the usual rounding error of sequential
//! floating-point addition.
//!
//! `find_max` (and the `min`/`max` fields of `Statistics`) use the classic
//! max-element scan: the running extreme is only replaced when a strict
//! comparison succeeds. NaN never compares, so a NaN is reported only when it
//! is the first element.

use crate::error::InvalidArgumentError;
use num_traits::float::TotalOrder;
use num_traits::{Float, NumCast};

/// Summary statistics of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics<T> {
    /// Arithmetic mean.
    pub mean: T,
    /// Middle value of the sorted sample; mean of the two middle values for even sizes.
    pub median: T,
    /// Population standard deviation.
    pub std_dev: T,
    /// Smallest value.
    pub min: T,
    /// Largest value.
    pub max: T,
}

impl<T> std::fmt::Display for Statistics<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Statistics(mean: {}, median: {}, std_dev: {}, min: {}, max: {})",
            self.mean, self.median, self.std_dev, self.min, self.max
        )
    }
}

#[inline]
fn split_non_empty<'a, T>(
    values: &'a [T],
    operation: &'static str,
) -> Result<(&'a T, &'a [T]), InvalidArgumentError> {
    values
        .split_first()
        .ok_or(InvalidArgumentError::EmptyInput { operation })
}

/// Naive left-to-right sum and the element count converted once to `T`.
#[inline]
fn sum_and_count<T>(values: &[T]) -> (T, T)
where
    T: Float,
{
    let sum = values.iter().fold(T::zero(), |sum, &x| sum + x);
    // Float types round large lengths instead of failing the conversion.
    let count = <T as NumCast>::from(values.len()).unwrap_or_else(T::infinity);
    (sum, count)
}

#[inline]
fn scan_max<T>(first: T, rest: &[T]) -> T
where
    T: Float,
{
    rest.iter()
        .fold(first, |max, &x| if max < x { x } else { max })
}

#[inline]
fn scan_min<T>(first: T, rest: &[T]) -> T
where
    T: Float,
{
    rest.iter()
        .fold(first, |min, &x| if x < min { x } else { min })
}

/// Computes the arithmetic mean of `values`.
///
/// # Errors
///
/// Returns `InvalidArgumentError::EmptyInput` if `values` is empty.
///
/// # Examples
///
/// ```rust
/// # use rudiments_core::stats::calculate_average;
/// assert_eq!(calculate_average(&[2.0, 4.0, 6.0]), Ok(4.0));
/// assert!(calculate_average::<f64>(&[]).is_err());
/// ```
pub fn calculate_average<T>(values: &[T]) -> Result<T, InvalidArgumentError>
where
    T: Float,
{
    split_non_empty(values, "calculate_average")?;

    let (sum, count) = sum_and_count(values);
    Ok(sum / count)
}

/// Returns the largest element of `values`.
///
/// # Errors
///
/// Returns `InvalidArgumentError::EmptyInput` if `values` is empty.
///
/// # Examples
///
/// ```rust
/// # use rudiments_core::stats::find_max;
/// assert_eq!(find_max(&[3.0, 1.0, 7.0, 2.0]), Ok(7.0));
/// assert!(find_max::<f64>(&[]).is_err());
/// ```
pub fn find_max<T>(values: &[T]) -> Result<T, InvalidArgumentError>
where
    T: Float,
{
    let (&first, rest) = split_non_empty(values, "find_max")?;
    Ok(scan_max(first, rest))
}

/// Computes mean, median, population standard deviation, minimum and maximum
/// of `values` in one call. The input is not modified; the median is taken
/// from a sorted copy.
///
/// # Errors
///
/// Returns `InvalidArgumentError::EmptyInput` if `values` is empty.
///
/// # Examples
///
/// ```rust
/// # use rudiments_core::stats::calculate_statistics;
/// let stats = calculate_statistics(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(stats.mean, 5.0);
/// assert_eq!(stats.median, 4.5);
/// assert_eq!(stats.std_dev, 2.0);
/// assert_eq!((stats.min, stats.max), (2.0, 9.0));
/// ```
pub fn calculate_statistics<T>(values: &[T]) -> Result<Statistics<T>, InvalidArgumentError>
where
    T: Float + TotalOrder,
{
    let (&first, rest) = split_non_empty(values, "calculate_statistics")?;

    let (sum, count) = sum_and_count(values);
    let mean = sum / count;

    let mut sorted = values.to_vec();
    sorted.sort_by(<T as TotalOrder>::total_cmp);
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / (T::one() + T::one())
    } else {
        sorted[mid]
    };

    let squared_deviations = values
        .iter()
        .fold(T::zero(), |acc, &x| acc + (x - mean).powi(2));
    let std_dev = (squared_deviations / count).sqrt();

    Ok(Statistics {
        mean,
        median,
        std_dev,
        min: scan_min(first, rest),
        max: scan_max(first, rest),
    })
}
