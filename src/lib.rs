//! Fixed Set Library
//!
//! A static set of integers with worst-case constant-time membership queries,
//! built with two-level (Fredman–Komlós–Szemerédi) perfect hashing, plus the
//! configuration, I/O and error handling used by the `fixed_set` binary.
//!
//! # Architecture
//!
//! The library is designed with the following principles in mind:
//! - Strict component boundaries
//! - Dependency injection for testability (hash randomness is passed in)
//! - Immutable after construction
//! - Comprehensive error handling and propagation

pub mod app;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod io;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the fixed-set tool.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing-backed error reporter. Returns `false` if a reporter
/// was already installed.
pub fn init() -> bool {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter))
}
