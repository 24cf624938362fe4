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


//! # Text Utilities
//!
//! String operations that never mutate their input. Every function works on
//! Unicode scalar values (`char`), so the outputs are always valid UTF-8;
//! for ASCII input this coincides with byte-wise processing.

/// Returns a new string with the characters of `s` in reverse order.
///
/// # Examples
///
/// ```rust
/// # use rudiments_core::text::reverse_string;
/// assert_eq!(reverse_string("abc"), "cba");
/// assert_eq!(reverse_string(""), "");
/// ```
#[inline]
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Checks whether `s` reads the same forwards and backwards.
///
/// Case is ignored, and so is every character that is not alphanumeric.
/// A string without any alphanumeric characters is a palindrome.
///
/// # Examples
///
/// ```rust
/// # use rudiments_core::text::is_palindrome;
/// assert!(is_palindrome("A man, a plan, a canal: Panama"));
/// assert!(!is_palindrome("rust"));
/// ```
pub fn is_palindrome(s: &str) -> bool {
    let cleaned: Vec<char> = s
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();

    cleaned.iter().eq(cleaned.iter().rev())
}

/// Counts the whitespace-separated words in `s`.
#[inline]
pub fn count_words(s: &str) -> usize {
    s.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_reverse_string_basic() {
        assert_eq!(reverse_string(""), "");
        assert_eq!(reverse_string("a"), "a");
        assert_eq!(reverse_string("abc"), "cba");
        assert_eq!(reverse_string("hello world"), "dlrow olleh");
    }

    #[test]
    fn test_reverse_string_does_not_mutate_input() {
        let input = String::from("stable");
        let reversed = reverse_string(&input);
        assert_eq!(input, "stable");
        assert_eq!(reversed, "elbats");
    }

    #[test]
    fn test_reverse_string_multibyte_stays_valid() {
        assert_eq!(reverse_string("größe"), "eßörg");
        assert_eq!(reverse_string("日本語"), "語本日");
    }

    #[test]
    fn test_reverse_string_twice_is_identity() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let len = rng.random_range(0..64);
            let s: String = (0..len).map(|_| rng.random::<char>()).collect();
            assert_eq!(reverse_string(&reverse_string(&s)), s);
        }
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("!!"));
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome("Was it a car or a cat I saw?"));
        assert!(is_palindrome("12321"));
        assert!(!is_palindrome("palindrome"));
        assert!(!is_palindrome("ab"));
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \t\n"), 0);
        assert_eq!(count_words("one"), 1);
        assert_eq!(count_words("  the quick\tbrown\nfox  "), 4);
    }
}
