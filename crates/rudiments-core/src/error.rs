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


//! Error type shared by every fallible operation in the crate.
//!
//! All failures are precondition violations detected before any work is done:
//! a zero divisor, a negative factorial argument, or an empty input sequence.
//! Numeric anomalies such as integer wrap-around or IEEE infinities are not
//! errors and are returned as ordinary values.

/// A precondition on an argument was violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgumentError {
    /// The divisor was exactly zero (`0.0` or `-0.0`).
    DivisionByZero,
    /// The factorial was requested for a negative number.
    NegativeFactorial {
        /// The rejected argument.
        n: i32,
    },
    /// An operation that needs at least one element received an empty slice.
    EmptyInput {
        /// The name of the operation that rejected the input (e.g. "calculate_average").
        operation: &'static str,
    },
}

impl std::fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::NegativeFactorial { n } => {
                write!(f, "Factorial not defined for negative numbers (got {n})")
            }
            Self::EmptyInput { operation } => {
                write!(f, "Cannot compute `{operation}` of an empty sequence")
            }
        }
    }
}

impl std::error::Error for InvalidArgumentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            InvalidArgumentError::DivisionByZero.to_string(),
            "Division by zero"
        );
        assert_eq!(
            InvalidArgumentError::NegativeFactorial { n: -3 }.to_string(),
            "Factorial not defined for negative numbers (got -3)"
        );
        assert_eq!(
            InvalidArgumentError::EmptyInput {
                operation: "find_max"
            }
            .to_string(),
            "Cannot compute `find_max` of an empty sequence"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&InvalidArgumentError::DivisionByZero);
    }
}
