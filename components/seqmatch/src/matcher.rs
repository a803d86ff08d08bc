//! Capacity-guarded front end over the matching functions.

use crate::config::MatcherConfig;
use crate::error::{MatchError, Side};
use crate::matching;
use crate::types::{CommonRun, SimilarityReport, Subsequence};
use tracing::{debug, trace, warn};

/// Runs the matching operations after checking the inputs against
/// configured limits.
///
/// The free functions in [`matching`](crate::matching) accept anything and
/// grow quadratically; this type rejects oversized inputs before a table is
/// allocated.
#[derive(Debug, Clone, Default)]
pub struct SequenceMatcher {
    config: MatcherConfig,
}

impl SequenceMatcher {
    /// Creates a matcher with the given limits.
    #[must_use]
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Longest common subsequence, see [`matching::lcs`].
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] if an input or the table exceeds the limits.
    pub fn lcs<T: PartialEq + Clone>(&self, left: &[T], right: &[T]) -> Result<Vec<T>, MatchError> {
        self.lcs_alignment(left, right).map(Subsequence::into_elements)
    }

    /// Longest common subsequence with positions, see [`matching::lcs_alignment`].
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] if an input or the table exceeds the limits.
    pub fn lcs_alignment<T: PartialEq + Clone>(
        &self,
        left: &[T],
        right: &[T],
    ) -> Result<Subsequence<T>, MatchError> {
        self.check_table(left.len(), right.len())?;
        let found = matching::lcs_alignment(left, right);
        debug!(
            left_len = left.len(),
            right_len = right.len(),
            lcs_len = found.len(),
            "Computed longest common subsequence"
        );
        Ok(found)
    }

    /// Longest common substring, see [`matching::lccs`].
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] if an input or the scan area exceeds the limits.
    pub fn lccs<T: PartialEq + Clone>(&self, left: &[T], right: &[T]) -> Result<Vec<T>, MatchError> {
        self.lccs_run(left, right).map(CommonRun::into_elements)
    }

    /// Longest common substring with offsets, see [`matching::lccs_run`].
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] if an input or the scan area exceeds the limits.
    pub fn lccs_run<T: PartialEq + Clone>(
        &self,
        left: &[T],
        right: &[T],
    ) -> Result<CommonRun<T>, MatchError> {
        self.check_table(left.len(), right.len())?;
        let run = matching::lccs_run(left, right);
        debug!(
            left_len = left.len(),
            right_len = right.len(),
            lccs_len = run.len(),
            left_start = run.left_start,
            right_start = run.right_start,
            "Computed longest common substring"
        );
        Ok(run)
    }

    /// Similarity ratio, see [`matching::similarity`].
    ///
    /// Only the input lengths are checked: the ratio needs linear memory.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InputTooLong`] if an input exceeds the limit.
    pub fn similarity<T: PartialEq>(&self, left: &[T], right: &[T]) -> Result<f64, MatchError> {
        self.check_inputs(left.len(), right.len())?;
        let ratio = matching::similarity(left, right);
        debug!(left_len = left.len(), right_len = right.len(), ratio, "Computed similarity");
        Ok(ratio)
    }

    /// Full comparison report, see [`matching::compare`].
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] if an input or the scan area exceeds the limits.
    pub fn compare<T: PartialEq + Clone>(
        &self,
        left: &[T],
        right: &[T],
    ) -> Result<SimilarityReport, MatchError> {
        self.check_table(left.len(), right.len())?;
        let report = matching::compare(left, right);
        debug!(?report, "Compared sequences");
        Ok(report)
    }

    /// [`Self::lcs`] over the `char`s of two strings.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] if an input or the table exceeds the limits.
    pub fn lcs_str(&self, left: &str, right: &str) -> Result<String, MatchError> {
        let (left, right) = chars_of(left, right);
        Ok(self.lcs(&left, &right)?.into_iter().collect())
    }

    /// [`Self::lccs`] over the `char`s of two strings.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] if an input or the scan area exceeds the limits.
    pub fn lccs_str(&self, left: &str, right: &str) -> Result<String, MatchError> {
        let (left, right) = chars_of(left, right);
        Ok(self.lccs(&left, &right)?.into_iter().collect())
    }

    /// [`Self::similarity`] over the `char`s of two strings.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InputTooLong`] if an input exceeds the limit.
    pub fn similarity_str(&self, left: &str, right: &str) -> Result<f64, MatchError> {
        let (left, right) = chars_of(left, right);
        self.similarity(&left, &right)
    }

    /// [`Self::compare`] over the `char`s of two strings.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] if an input or the scan area exceeds the limits.
    pub fn compare_str(&self, left: &str, right: &str) -> Result<SimilarityReport, MatchError> {
        let (left, right) = chars_of(left, right);
        self.compare(&left, &right)
    }

    fn check_inputs(&self, left_len: usize, right_len: usize) -> Result<(), MatchError> {
        let max = self.config.max_input_len;
        for (side, len) in [(Side::Left, left_len), (Side::Right, right_len)] {
            if len > max {
                warn!(%side, len, max, "Rejected oversized input");
                return Err(MatchError::InputTooLong { side, len, max });
            }
        }
        Ok(())
    }

    fn check_table(&self, left_len: usize, right_len: usize) -> Result<(), MatchError> {
        self.check_inputs(left_len, right_len)?;

        let max = self.config.max_table_cells;
        let cells = left_len.saturating_mul(right_len);
        if cells > max {
            warn!(cells, max, "Rejected oversized table");
            return Err(MatchError::TableTooLarge { cells, max });
        }
        trace!(left_len, right_len, cells, "Table within limits");
        Ok(())
    }
}

fn chars_of(left: &str, right: &str) -> (Vec<char>, Vec<char>) {
    (left.chars().collect(), right.chars().collect())
}
