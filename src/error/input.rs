//! Input error module.
//!
//! Errors raised while reading count-prefixed integer vectors.

use thiserror::Error;

/// Errors that can occur while reading the integer input stream.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum InputError {
    /// The stream ended before the count of a vector.
    #[error("Missing element count for {section}")]
    MissingCount {
        /// Which vector was being read
        section: &'static str,
    },

    /// The stream ended before all announced elements were read.
    #[error("Expected {expected} values for {section}, found {found}")]
    Truncated {
        /// Which vector was being read
        section: &'static str,
        /// Announced element count
        expected: usize,
        /// Elements actually present
        found: usize,
    },

    /// A token could not be parsed as the expected number.
    #[error("Invalid token {token:?} at position {position}")]
    InvalidToken {
        /// The offending token
        token: String,
        /// Zero-based token index in the stream
        position: usize,
    },
}
