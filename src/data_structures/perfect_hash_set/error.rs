// Copyright (c) 2025 Fixed Set Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the perfect hash set.
//!
//! Collisions and over-budget partitions are retried internally and never
//! show up here.

use crate::data_structures::perfect_hash_set::Key;

/// Errors that can occur while building a perfect hash set.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PerfectHashSetError {
    /// The input contained the same key twice and the reject policy is active
    #[error("Duplicate key in input: {0}")]
    DuplicateKey(Key),

    /// `initialize` was called on a set that is already built
    #[error("Perfect hash set is already initialized")]
    AlreadyInitialized,
}

/// Result type for perfect hash set operations
pub type Result<T> = std::result::Result<T, PerfectHashSetError>;
