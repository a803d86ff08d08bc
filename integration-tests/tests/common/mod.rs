//! Shared test utilities for integration tests.
//!
//! Provides helpers for checking matching results against their definitions
//! independently of the implementation under test.

#![allow(dead_code)]

use seqmatch::{MatcherConfig, SequenceMatcher};

/// Collects the `char`s of a string.
pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Returns `true` if `needle` occurs in `haystack` in order, possibly with gaps.
pub fn is_subsequence<T: PartialEq>(needle: &[T], haystack: &[T]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|n| rest.any(|h| h == n))
}

/// Returns `true` if `needle` occurs contiguously in `haystack`.
pub fn is_substring<T: PartialEq>(needle: &[T], haystack: &[T]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}

/// Exhaustive longest-common-substring length, quartic but obviously correct.
pub fn naive_lccs_len<T: PartialEq>(left: &[T], right: &[T]) -> usize {
    let mut best = 0;
    for i in 0..left.len() {
        for j in 0..right.len() {
            let mut k = 0;
            while i + k < left.len() && j + k < right.len() && left[i + k] == right[j + k] {
                k += 1;
            }
            best = best.max(k);
        }
    }
    best
}

/// Matcher with tight limits for capacity tests.
pub fn tight_matcher(max_input_len: usize, max_table_cells: usize) -> SequenceMatcher {
    let config = MatcherConfig::builder()
        .max_input_len(max_input_len)
        .max_table_cells(max_table_cells)
        .build()
        .expect("test limits are non-zero");
    SequenceMatcher::new(config)
}
