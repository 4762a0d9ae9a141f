//! Configuration error module.
//!
//! Errors raised while loading, parsing and validating the application
//! configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration file given on the command line does not exist.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// The configuration sources could not be parsed or merged.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(String),

    /// A value parsed fine but is not acceptable.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// A numeric value lies outside its valid range.
    #[error("Configuration value {key} is out of valid range: {message}")]
    ValueOutOfRange {
        /// The key of the invalid value
        key: String,
        /// Description of the valid range
        message: String,
    },
}
