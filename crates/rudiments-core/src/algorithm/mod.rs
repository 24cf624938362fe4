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


use num_traits::PrimInt;

/// Checks whether `values` is sorted in non-decreasing order.
///
/// Returns `true` for empty and single-element slices.
#[inline(always)]
pub fn is_sorted_ascending<T>(values: &[T]) -> bool
where
    T: PrimInt,
{
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Merges two ascending slices into a new ascending vector in linear time.
///
/// This is the classic two-pointer merge. On ties the element from `a` is
/// emitted first, so the merge is stable with respect to the argument order.
///
/// # Invariants
///
/// - The result always has `a.len() + b.len()` elements.
/// - The result is sorted if and only if both inputs are sorted. Sortedness
///   is a precondition that is not checked: unsorted inputs still yield every
///   element exactly once, just not in order.
///
/// # Examples
///
/// ```rust
/// # use rudiments_core::algorithm::merge_sorted;
/// assert_eq!(merge_sorted(&[1, 3, 5], &[2, 4, 6]), vec![1, 2, 3, 4, 5, 6]);
/// assert_eq!(merge_sorted(&[], &[1, 2]), vec![1, 2]);
/// ```
pub fn merge_sorted<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: PrimInt,
{
    let mut merged = Vec::with_capacity(a.len() + b.len());

    let mut i: usize = 0;
    let mut j: usize = 0;

    while i < a.len() && j < b.len() {
        if a[i] <= b[j] {
            merged.push(a[i]);
            i += 1;
        } else {
            merged.push(b[j]);
            j += 1;
        }
    }

    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    type IntegerType = i32;

    fn random_sorted(rng: &mut ChaCha8Rng, max_len: usize) -> Vec<IntegerType> {
        let len = rng.random_range(0..=max_len);
        let mut v: Vec<IntegerType> = (0..len).map(|_| rng.random_range(-50..50)).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_is_sorted_ascending() {
        let empty: [IntegerType; 0] = [];
        assert!(is_sorted_ascending(&empty));
        assert!(is_sorted_ascending(&[1]));
        assert!(is_sorted_ascending(&[1, 1, 2, 3]));
        assert!(!is_sorted_ascending(&[2, 1]));
        assert!(!is_sorted_ascending(&[1, 3, 2, 4]));
    }

    #[test]
    fn test_merge_sorted_interleaved() {
        assert_eq!(merge_sorted(&[1, 3, 5], &[2, 4, 6]), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_merge_sorted_with_empty_side() {
        let empty: [IntegerType; 0] = [];
        assert_eq!(merge_sorted(&empty, &[1, 2]), vec![1, 2]);
        assert_eq!(merge_sorted(&[1, 2], &empty), vec![1, 2]);
        assert!(merge_sorted(&empty, &empty).is_empty());
    }

    #[test]
    fn test_merge_sorted_disjoint_ranges() {
        assert_eq!(merge_sorted(&[7, 8, 9], &[1, 2]), vec![1, 2, 7, 8, 9]);
        assert_eq!(merge_sorted(&[1, 2], &[7, 8, 9]), vec![1, 2, 7, 8, 9]);
    }

    #[test]
    fn test_merge_sorted_with_duplicates_across_inputs() {
        assert_eq!(merge_sorted(&[1, 2, 2], &[2, 3]), vec![1, 2, 2, 2, 3]);
        assert_eq!(merge_sorted(&[2], &[1, 2, 2]), vec![1, 2, 2, 2]);
    }

    #[test]
    fn test_merge_sorted_equal_inputs() {
        assert_eq!(merge_sorted(&[5, 5], &[5, 5]), vec![5, 5, 5, 5]);
    }

    #[test]
    fn test_merge_sorted_extreme_values() {
        assert_eq!(
            merge_sorted(&[IntegerType::MIN, 0], &[-1, IntegerType::MAX]),
            vec![IntegerType::MIN, -1, 0, IntegerType::MAX]
        );
    }

    #[test]
    fn test_merge_sorted_unsorted_input_keeps_all_elements() {
        let merged = merge_sorted(&[3, 1], &[2]);
        assert_eq!(merged.len(), 3);
        assert!(!is_sorted_ascending(&merged));

        let mut check = merged.clone();
        check.sort_unstable();
        assert_eq!(check, vec![1, 2, 3]);
    }

    #[test]
    fn test_merge_sorted_postconditions_random() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..500 {
            let a = random_sorted(&mut rng, 32);
            let b = random_sorted(&mut rng, 32);

            let merged = merge_sorted(&a, &b);
            assert_eq!(merged.len(), a.len() + b.len());
            assert!(is_sorted_ascending(&merged));

            let mut expected = [a.clone(), b.clone()].concat();
            expected.sort();
            assert_eq!(merged, expected);
        }
    }

    #[test]
    fn test_merge_sorted_does_not_mutate_inputs() {
        let a = vec![1, 4];
        let b = vec![2, 3];
        let _ = merge_sorted(&a, &b);
        assert_eq!(a, vec![1, 4]);
        assert_eq!(b, vec![2, 3]);
    }
}
