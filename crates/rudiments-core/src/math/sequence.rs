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


use crate::num::ops::wrapping_arithmetic::WrappingAddVal;

/// Returns the first `n` Fibonacci numbers, starting at `0, 1`.
///
/// Non-positive `n` yields an empty vector. Terms beyond the 93rd no longer
/// fit into an `i64` and wrap around.
///
/// # Examples
///
/// ```rust
/// # use rudiments_core::math::sequence::fibonacci;
/// assert_eq!(fibonacci(0), Vec::<i64>::new());
/// assert_eq!(fibonacci(1), vec![0]);
/// assert_eq!(fibonacci(7), vec![0, 1, 1, 2, 3, 5, 8]);
/// ```
pub fn fibonacci(n: i32) -> Vec<i64> {
    if n <= 0 {
        return Vec::new();
    }

    let n = n.unsigned_abs() as usize;
    let mut sequence = Vec::with_capacity(n);
    sequence.push(0_i64);
    if n > 1 {
        sequence.push(1_i64);
    }

    while sequence.len() < n {
        let len = sequence.len();
        sequence.push(sequence[len - 1].wrapping_add_val(sequence[len - 2]));
    }

    sequence
}
