// Copyright (c) 2025 Fixed Set Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the perfect hash set.

use serde::{Deserialize, Serialize};

/// Smallest accepted memory-repletion ratio.
///
/// A random partition of n keys into n buckets has `E[Σ k²] ≈ 2n - 1`, so any
/// ratio below 2 almost never accepts a partition.
pub const MIN_MEMORY_RATIO: usize = 2;

/// Largest accepted memory-repletion ratio.
pub const MAX_MEMORY_RATIO: usize = 64;

/// What to do when the input contains the same key more than once.
///
/// Two equal keys always land in the same bucket and no hash function can put
/// them into distinct slots, so they must be handled before construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Silently drop repeated keys
    #[default]
    Deduplicate,
    /// Fail construction with `DuplicateKey`
    Reject,
}

/// Configuration for the perfect hash set.
///
/// Fields are only reachable through the builder methods, so the memory ratio
/// always lies in `MIN_MEMORY_RATIO..=MAX_MEMORY_RATIO`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerfectHashSetConfig {
    /// Upper bound on `Σ k_i²` relative to the number of keys.
    /// Larger values accept more top-level partitions at the cost of memory.
    memory_ratio: usize,

    /// How repeated input keys are treated.
    duplicate_policy: DuplicatePolicy,
}

impl PerfectHashSetConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the memory-repletion ratio.
    ///
    /// # Arguments
    ///
    /// * `memory_ratio` - The ratio (clamped to 2..=64).
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_memory_ratio(mut self, memory_ratio: usize) -> Self {
        self.memory_ratio = memory_ratio.clamp(MIN_MEMORY_RATIO, MAX_MEMORY_RATIO);
        self
    }

    /// Sets the duplicate key policy.
    pub fn with_duplicate_policy(mut self, duplicate_policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = duplicate_policy;
        self
    }

    /// The memory-repletion ratio, always within the accepted range.
    pub fn memory_ratio(&self) -> usize {
        self.memory_ratio.clamp(MIN_MEMORY_RATIO, MAX_MEMORY_RATIO)
    }

    /// The duplicate key policy.
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    /// Maximum total number of bucket slots allowed for `len` keys.
    pub fn slot_budget(&self, len: usize) -> usize {
        self.memory_ratio().saturating_mul(len)
    }
}

impl Default for PerfectHashSetConfig {
    fn default() -> Self {
        Self {
            memory_ratio: 4,
            duplicate_policy: DuplicatePolicy::Deduplicate,
        }
    }
}
