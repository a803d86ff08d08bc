//! Longest contiguous common run (longest common substring).
//!
//! Matching cells of the `left x right` equality grid form runs along
//! diagonals of constant `i - j`. Every diagonal is walked once and the
//! equality flags are evaluated on the fly, so no grid is allocated.
//!
//! Scan order decides which run wins a tie: diagonals that start on row 0 are
//! visited first, from the last column back to column 0, followed by the
//! diagonals that start on column 0 from row 1 downwards. Only a strictly
//! longer run replaces the current best.

use crate::types::CommonRun;

#[derive(Default)]
struct Best {
    len: usize,
    left_start: usize,
    right_start: usize,
}

/// Returns one longest run of elements that appears contiguously in both
/// `left` and `right`. Empty when the inputs share no element.
///
/// # Example
///
/// ```rust
/// let left: Vec<char> = "abcdefgh".chars().collect();
/// let right: Vec<char> = "obceo".chars().collect();
/// assert_eq!(seqmatch::lccs(&left, &right), vec!['b', 'c']);
/// ```
#[must_use]
pub fn lccs<T: PartialEq + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    lccs_run(left, right).into_elements()
}

/// Like [`lccs`], but also reports where the run starts in both inputs.
#[must_use]
pub fn lccs_run<T: PartialEq + Clone>(left: &[T], right: &[T]) -> CommonRun<T> {
    let mut best = Best::default();

    for col in (0..right.len()).rev() {
        scan_diagonal(left, right, 0, col, &mut best);
    }
    for row in 1..left.len() {
        scan_diagonal(left, right, row, 0, &mut best);
    }

    if best.len == 0 {
        return CommonRun::empty();
    }
    CommonRun {
        elements: left[best.left_start..best.left_start + best.len].to_vec(),
        left_start: best.left_start,
        right_start: best.right_start,
    }
}

fn scan_diagonal<T: PartialEq>(
    left: &[T],
    right: &[T],
    row: usize,
    col: usize,
    best: &mut Best,
) {
    let mut run = 0;
    let mut start = (row, col);

    for (k, (l, r)) in left[row..].iter().zip(&right[col..]).enumerate() {
        if l != r {
            run = 0;
            continue;
        }
        if run == 0 {
            start = (row + k, col + k);
        }
        run += 1;
        if run > best.len {
            *best = Best {
                len: run,
                left_start: start.0,
                right_start: start.1,
            };
        }
    }
}

/// [`lccs`] over the `char`s of two strings.
#[must_use]
pub fn lccs_str(left: &str, right: &str) -> String {
    let left: Vec<char> = left.chars().collect();
    let right: Vec<char> = right.chars().collect();
    lccs(&left, &right).into_iter().collect()
}
