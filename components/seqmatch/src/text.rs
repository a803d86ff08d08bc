//! Small string helpers that usually accompany matching: URL stripping,
//! random identifiers, hex digests and regex match counting.

use crate::error::TextError;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use sha2::{Digest, Sha256, Sha512};
use std::str::FromStr;

#[allow(clippy::expect_used)] // The pattern is a compile-time constant
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(https?|ftp|file)://[-a-zA-Z0-9+&@#/%?=~_|!:,.;]*[-a-zA-Z0-9+&@#/%=~_|]")
        .expect("URL pattern is valid")
});

/// Removes every `http`, `https`, `ftp` and `file` URL from `text`.
#[must_use]
pub fn remove_urls(text: &str) -> String {
    URL_PATTERN.replace_all(text, "").into_owned()
}

/// Generates a random string of `len` ASCII letters and digits.
///
/// Each character first picks digit, upper-case or lower-case with equal
/// probability, then a uniform member of that class.
#[must_use]
pub fn random_alphanumeric(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| {
            let (base, span) = match rng.gen_range(0..3) {
                0 => (b'0', 10),
                1 => (b'A', 26),
                _ => (b'a', 26),
            };
            char::from(base + rng.gen_range(0..span))
        })
        .collect()
}

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestAlgorithm {
    /// SHA-256.
    #[default]
    Sha256,
    /// SHA-512.
    Sha512,
}

impl FromStr for DigestAlgorithm {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha512" | "sha-512" => Ok(Self::Sha512),
            _ => Err(TextError::UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigestAlgorithm::Sha256 => write!(f, "sha256"),
            DigestAlgorithm::Sha512 => write!(f, "sha512"),
        }
    }
}

/// Hashes the UTF-8 bytes of `text` and returns the lower-case hex digest.
#[must_use]
pub fn digest_hex(text: &str, algorithm: DigestAlgorithm) -> String {
    match algorithm {
        DigestAlgorithm::Sha256 => hex::encode(Sha256::digest(text.as_bytes())),
        DigestAlgorithm::Sha512 => hex::encode(Sha512::digest(text.as_bytes())),
    }
}

/// Counts occurrences of a compiled regular expression.
#[derive(Debug, Clone)]
pub struct PatternCounter {
    regex: Regex,
}

impl PatternCounter {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::InvalidPattern`] if the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self, TextError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Number of non-overlapping matches in `haystack`.
    #[must_use]
    pub fn count(&self, haystack: &str) -> usize {
        self.regex.find_iter(haystack).count()
    }

    /// Like [`Self::count`], treating a missing haystack as empty.
    #[must_use]
    pub fn count_opt(&self, haystack: Option<&str>) -> usize {
        haystack.map_or(0, |h| self.count(h))
    }

    /// The source pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_bare_url() {
        assert_eq!(remove_urls("http://xxx.xxx"), "");
    }

    #[test]
    fn test_remove_urls_keeps_text() {
        assert_eq!(
            remove_urls("see https://example.com/a?b=c and ftp://host/file.txt."),
            "see  and ."
        );
    }

    #[test]
    fn test_random_length_and_charset() {
        let s = random_alphanumeric(9);
        assert_eq!(s.len(), 9);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(random_alphanumeric(0).is_empty());
    }

    #[test]
    fn test_digest_known_values() {
        assert_eq!(
            digest_hex("abc", DigestAlgorithm::Sha256),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(digest_hex("abc", DigestAlgorithm::Sha512).len(), 128);
    }

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("SHA-256".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha256);
        assert_eq!("sha512".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha512);
        assert!(matches!(
            "md5".parse::<DigestAlgorithm>(),
            Err(TextError::UnknownAlgorithm { .. })
        ));
    }

    #[test]
    fn test_pattern_counter() {
        let counter = PatternCounter::new("ttt").unwrap();
        assert_eq!(counter.count("ttt"), 1);
        assert_eq!(counter.count("tttttt ttt"), 3);
        assert_eq!(counter.count_opt(None), 0);
        assert_eq!(counter.as_str(), "ttt");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            PatternCounter::new("("),
            Err(TextError::InvalidPattern(_))
        ));
    }
}
