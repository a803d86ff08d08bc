//! Similarity ratio derived from the longest common subsequence.

use super::substring::lccs_run;
use super::table::rolling_length;
use crate::types::SimilarityReport;

/// Similarity of two sequences in `[0, 1]`.
///
/// Defined as the LCS length over the length of the longer input. Two empty
/// inputs score `0.0`. The ratio is symmetric in its arguments.
///
/// # Example
///
/// ```rust
/// let left: Vec<char> = "abcde".chars().collect();
/// let right: Vec<char> = "ace".chars().collect();
/// assert!((seqmatch::similarity(&left, &right) - 0.6).abs() < 1e-9);
/// ```
#[must_use]
pub fn similarity<T: PartialEq>(left: &[T], right: &[T]) -> f64 {
    ratio(rolling_length(left, right), left.len(), right.len())
}

/// [`similarity`] over the `char`s of two strings.
#[must_use]
pub fn similarity_str(left: &str, right: &str) -> f64 {
    let left: Vec<char> = left.chars().collect();
    let right: Vec<char> = right.chars().collect();
    similarity(&left, &right)
}

/// Computes the ratio together with both match lengths.
#[must_use]
pub fn compare<T: PartialEq + Clone>(left: &[T], right: &[T]) -> SimilarityReport {
    let lcs_len = rolling_length(left, right);
    SimilarityReport {
        left_len: left.len(),
        right_len: right.len(),
        lcs_len,
        lccs_len: lccs_run(left, right).len(),
        ratio: ratio(lcs_len, left.len(), right.len()),
    }
}

/// [`compare`] over the `char`s of two strings.
#[must_use]
pub fn compare_str(left: &str, right: &str) -> SimilarityReport {
    let left: Vec<char> = left.chars().collect();
    let right: Vec<char> = right.chars().collect();
    compare(&left, &right)
}

#[allow(clippy::cast_precision_loss)]
fn ratio(common: usize, left_len: usize, right_len: usize) -> f64 {
    let longest = left_len.max(right_len);
    if longest == 0 {
        return 0.0;
    }
    common as f64 / longest as f64
}
