//! Sequence matching: longest common subsequence, longest common substring
//! and the similarity ratio.
//!
//! Every function here is pure and allocates its own working memory, so all
//! of them can be called concurrently on independent inputs. Time is
//! quadratic in the input lengths; use
//! [`SequenceMatcher`](crate::SequenceMatcher) to bound it.

mod ratio;
mod subsequence;
mod substring;
mod table;

pub use ratio::{compare, compare_str, similarity, similarity_str};
pub use subsequence::{lcs, lcs_alignment, lcs_len, lcs_str};
pub use substring::{lccs, lccs_run, lccs_str};
