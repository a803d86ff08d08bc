//! Result types returned by the matching operations.

use serde::{Deserialize, Serialize};

/// A longest common subsequence together with where each element matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subsequence<T> {
    /// The matched elements, in order.
    pub elements: Vec<T>,
    /// `(index_in_left, index_in_right)` for every element, ascending.
    pub positions: Vec<(usize, usize)>,
}

impl<T> Subsequence<T> {
    /// Creates an empty subsequence.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            elements: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Number of matched elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` when nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Consumes the match and returns the elements.
    #[must_use]
    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }
}

/// A longest contiguous run shared by both inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommonRun<T> {
    /// The shared elements.
    pub elements: Vec<T>,
    /// Offset of the run in the left input.
    pub left_start: usize,
    /// Offset of the run in the right input.
    pub right_start: usize,
}

impl<T> CommonRun<T> {
    /// Creates an empty run anchored at the origin.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            elements: Vec::new(),
            left_start: 0,
            right_start: 0,
        }
    }

    /// Length of the run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` when the inputs share no element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Half-open range of the run in the left input.
    #[must_use]
    pub fn left_range(&self) -> std::ops::Range<usize> {
        self.left_start..self.left_start + self.len()
    }

    /// Half-open range of the run in the right input.
    #[must_use]
    pub fn right_range(&self) -> std::ops::Range<usize> {
        self.right_start..self.right_start + self.len()
    }

    /// Consumes the run and returns the elements.
    #[must_use]
    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }
}

/// Summary of how two inputs relate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimilarityReport {
    /// Length of the left input.
    pub left_len: usize,
    /// Length of the right input.
    pub right_len: usize,
    /// Length of the longest common subsequence.
    pub lcs_len: usize,
    /// Length of the longest common substring.
    pub lccs_len: usize,
    /// `lcs_len / max(left_len, right_len)`, or `0.0` when both are empty.
    pub ratio: f64,
}

impl SimilarityReport {
    /// Returns `true` when the inputs are element-for-element identical.
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.left_len == self.right_len && self.lccs_len == self.left_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_run_ranges() {
        let run = CommonRun {
            elements: vec!['f', 'g', 'h', 'i'],
            left_start: 8,
            right_start: 8,
        };
        assert_eq!(run.left_range(), 8..12);
        assert_eq!(run.right_range(), 8..12);
        assert_eq!(run.len(), 4);
    }

    #[test]
    fn test_empty_results() {
        assert!(Subsequence::<u8>::empty().is_empty());
        let run = CommonRun::<u8>::empty();
        assert!(run.is_empty());
        assert_eq!(run.left_range(), 0..0);
    }

    #[test]
    fn test_report_serializes() {
        let report = SimilarityReport {
            left_len: 5,
            right_len: 3,
            lcs_len: 3,
            lccs_len: 1,
            ratio: 0.6,
        };
        let json = serde_json::to_value(report).expect("report should serialize");
        assert_eq!(json["lcs_len"], 3);
        assert_eq!(json["ratio"], 0.6);
        assert!(!report.is_identical());
    }
}
