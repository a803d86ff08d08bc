//! Longest common subsequence.

use super::table::{LengthTable, rolling_length};
use crate::types::Subsequence;

/// Returns one longest subsequence common to `left` and `right`.
///
/// Relative order is preserved, contiguity is not. When several longest
/// subsequences exist, the backtracking walk prefers skipping an element of
/// `right` over skipping an element of `left`, so the result is
/// deterministic. Either input empty yields an empty result.
///
/// Runs in `O(left.len() * right.len())` time and space.
///
/// # Example
///
/// ```rust
/// let left: Vec<char> = "xaxbxcxdxex".chars().collect();
/// let right: Vec<char> = "oaocoeo".chars().collect();
/// assert_eq!(seqmatch::lcs(&left, &right), vec!['a', 'c', 'e']);
/// ```
#[must_use]
pub fn lcs<T: PartialEq + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    lcs_alignment(left, right).into_elements()
}

/// Like [`lcs`], but also reports where each element matched in both inputs.
#[must_use]
pub fn lcs_alignment<T: PartialEq + Clone>(left: &[T], right: &[T]) -> Subsequence<T> {
    if left.is_empty() || right.is_empty() {
        return Subsequence::empty();
    }

    let table = LengthTable::build(left, right);
    let total = table.total();
    let mut elements = Vec::with_capacity(total);
    let mut positions = Vec::with_capacity(total);

    let (mut i, mut j) = (left.len(), right.len());
    while i > 0 && j > 0 {
        let here = table.get(i, j);
        if here == table.get(i, j - 1) {
            j -= 1;
        } else if here == table.get(i - 1, j) {
            i -= 1;
        } else {
            elements.push(left[i - 1].clone());
            positions.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
        }
    }

    elements.reverse();
    positions.reverse();
    Subsequence {
        elements,
        positions,
    }
}

/// Length of the longest common subsequence.
///
/// Uses two rolling rows, so memory is `O(min(left.len(), right.len()))`.
/// Always equal to `lcs(left, right).len()`.
#[must_use]
pub fn lcs_len<T: PartialEq>(left: &[T], right: &[T]) -> usize {
    rolling_length(left, right)
}

/// [`lcs`] over the `char`s of two strings.
#[must_use]
pub fn lcs_str(left: &str, right: &str) -> String {
    let left: Vec<char> = left.chars().collect();
    let right: Vec<char> = right.chars().collect();
    lcs(&left, &right).into_iter().collect()
}
