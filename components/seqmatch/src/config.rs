//! Configuration for the capacity-guarded matcher.
//!
//! Provides a strongly-typed configuration with environment variable
//! support and sensible defaults.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Limits applied by [`SequenceMatcher`](crate::SequenceMatcher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Maximum number of elements accepted in either input.
    #[serde(default = "default_max_input_len")]
    pub max_input_len: usize,

    /// Maximum number of cells a quadratic table may hold.
    #[serde(default = "default_max_table_cells")]
    pub max_table_cells: usize,

    /// Requests debug-level logging from the front end.
    ///
    /// The matcher itself ignores this flag; applications pass it to
    /// [`init_logging`](crate::init_logging) when they install a subscriber.
    #[serde(default)]
    pub verbose: bool,
}

impl MatcherConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from environment variables.
    ///
    /// Environment variables are prefixed with `SEQMATCH_`.
    /// For example: `SEQMATCH_MAX_INPUT_LEN=5000`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// Keys are the full environment variable names, e.g.
    /// `SEQMATCH_MAX_TABLE_CELLS`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a value is present but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup("SEQMATCH_MAX_INPUT_LEN") {
            config.max_input_len = parse_limit("max_input_len", val)?;
        }

        if let Some(val) = lookup("SEQMATCH_MAX_TABLE_CELLS") {
            config.max_table_cells = parse_limit("max_table_cells", val)?;
        }

        if let Some(val) = lookup("SEQMATCH_VERBOSE") {
            config.verbose = val == "1" || val.eq_ignore_ascii_case("true");
        }

        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a limit is zero.
    pub fn validate(&self) -> Result<&Self, ConfigError> {
        if self.max_input_len == 0 {
            return Err(ConfigError::Invalid {
                key: "max_input_len".to_string(),
                value: "0".to_string(),
            });
        }

        if self.max_table_cells == 0 {
            return Err(ConfigError::Invalid {
                key: "max_table_cells".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(self)
    }

    /// Returns a builder for creating configuration.
    #[must_use]
    pub fn builder() -> MatcherConfigBuilder {
        MatcherConfigBuilder::default()
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_input_len: default_max_input_len(),
            max_table_cells: default_max_table_cells(),
            verbose: false,
        }
    }
}

/// Builder for constructing [`MatcherConfig`].
#[derive(Debug, Default)]
pub struct MatcherConfigBuilder {
    max_input_len: Option<usize>,
    max_table_cells: Option<usize>,
    verbose: Option<bool>,
}

impl MatcherConfigBuilder {
    /// Sets the maximum input length.
    #[must_use]
    pub fn max_input_len(mut self, len: usize) -> Self {
        self.max_input_len = Some(len);
        self
    }

    /// Sets the maximum table size in cells.
    #[must_use]
    pub fn max_table_cells(mut self, cells: usize) -> Self {
        self.max_table_cells = Some(cells);
        self
    }

    /// Sets whether to enable verbose logging.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Builds the configuration, validating all values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a limit is zero.
    pub fn build(self) -> Result<MatcherConfig, ConfigError> {
        let mut config = MatcherConfig::default();

        if let Some(v) = self.max_input_len {
            config.max_input_len = v;
        }
        if let Some(v) = self.max_table_cells {
            config.max_table_cells = v;
        }
        if let Some(v) = self.verbose {
            config.verbose = v;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_limit(key: &str, val: String) -> Result<usize, ConfigError> {
    val.trim().parse().map_err(|_| ConfigError::Invalid {
        key: key.to_string(),
        value: val,
    })
}

fn default_max_input_len() -> usize {
    10_000
}

fn default_max_table_cells() -> usize {
    25_000_000
}
