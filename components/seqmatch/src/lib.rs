//! seqmatch - sequence and string similarity.
//!
//! This crate computes the longest common subsequence (LCS), the longest
//! contiguous common substring (LCCS) and a similarity ratio derived from the
//! LCS length. It is meant for record deduplication and fuzzy name matching
//! where inputs are short and a deterministic answer matters.
//!
//! # Features
//!
//! - **Matching**: generic over any `PartialEq` element, with `&str` adapters
//!   that compare Unicode scalar values
//! - **Capacity guard**: [`SequenceMatcher`] rejects inputs that would make
//!   the quadratic tables too large
//! - **Configuration**: environment-based [`MatcherConfig`] with validation
//! - **Error Handling**: structured error hierarchy using `thiserror`
//! - **Text utilities**: URL stripping, random identifiers, hex digests and
//!   regex match counting
//!
//! # Example
//!
//! ```rust
//! use seqmatch::{MatcherConfig, SequenceMatcher, lccs_str, lcs_str, similarity_str};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! assert_eq!(lcs_str("xaxbxcxdxex", "oaocoeo"), "ace");
//! assert_eq!(lccs_str("oobczoeofghio", "axbczdxefghijk"), "fghi");
//! assert!((similarity_str("abcde", "ace") - 0.6).abs() < 1e-9);
//!
//! let matcher = SequenceMatcher::new(MatcherConfig::builder().max_input_len(256).build()?);
//! let report = matcher.compare_str("Widget 12oz", "Widget 12 oz")?;
//! assert_eq!(report.lcs_len, 11);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod matcher;
pub mod matching;
pub mod text;
pub mod types;

// Re-export commonly used types
pub use config::{MatcherConfig, MatcherConfigBuilder};
pub use error::{ConfigError, Error, MatchError, Side, TextError};
pub use matcher::SequenceMatcher;
pub use matching::{
    compare, compare_str, lccs, lccs_run, lccs_str, lcs, lcs_alignment, lcs_len, lcs_str,
    similarity, similarity_str,
};
pub use text::{DigestAlgorithm, PatternCounter, digest_hex, random_alphanumeric, remove_urls};
pub use types::{CommonRun, SimilarityReport, Subsequence};

/// Version of the seqmatch library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes logging.
///
/// Honours `RUST_LOG` when set; otherwise logs at `debug` when `verbose` is
/// true and at `info` when it is not. Call once at application start.
///
/// # Errors
///
/// Returns an error if a global tracing subscriber has already been set.
pub fn init_logging(verbose: bool) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
}
