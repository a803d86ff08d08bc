//! Error types for seqmatch.
//!
//! The free matching functions are total and never fail. Errors only come
//! from the capacity-guarded [`SequenceMatcher`](crate::SequenceMatcher),
//! configuration parsing, and the text utilities.

use thiserror::Error;

/// Top-level error type for seqmatch operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A matching operation was rejected.
    #[error("Matching failed: {0}")]
    Match(#[from] MatchError),

    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A text utility failed.
    #[error("Text processing failed: {0}")]
    Text(#[from] TextError),
}

/// Identifies which of the two compared inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The first input.
    Left,
    /// The second input.
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Errors raised by the capacity guard before any table is allocated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// One input exceeds the configured maximum length.
    #[error("{side} input too long: {len} elements (max: {max})")]
    InputTooLong {
        /// Which input was rejected.
        side: Side,
        /// Length of the rejected input.
        len: usize,
        /// Configured maximum length.
        max: usize,
    },

    /// The dynamic-programming table would exceed the configured cell budget.
    #[error("Table too large: {cells} cells (max: {max})")]
    TableTooLarge {
        /// Number of cells the table would need.
        cells: usize,
        /// Configured maximum number of cells.
        max: usize,
    },
}

/// Errors related to matcher configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A configuration value could not be parsed or is out of range.
    #[error("Invalid configuration for '{key}': {value}")]
    Invalid {
        /// The configuration key.
        key: String,
        /// The offending value.
        value: String,
    },
}

/// Errors related to the text utilities.
#[derive(Error, Debug)]
pub enum TextError {
    /// A regular expression failed to compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The requested digest algorithm is not supported.
    #[error("Unknown digest algorithm: {name}")]
    UnknownAlgorithm {
        /// The name that was requested.
        name: String,
    },
}
