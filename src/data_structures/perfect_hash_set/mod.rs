// Copyright (c) 2025 Fixed Set Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Static integer set built with two-level (FKS) perfect hashing.
//!
//! The set is built once from a known collection of keys and then answers
//! membership queries with exactly two hash evaluations, independent of the
//! input. Construction runs in expected linear time.
//!
//! # Features
//!
//! - Worst-case O(1) lookups, expected O(n) construction
//! - Total bucket memory bounded by a configurable multiple of n
//! - Random source passed explicitly, so builds are reproducible from a seed
//! - Any `i64` can be stored, including `0`, `i64::MIN` and `i64::MAX`
//! - Zero unsafe code
//!
//! # Example
//!
//! ```
//! use fixed_set_lib::data_structures::perfect_hash_set::{
//!     HashFunctionFactory, PerfectHashSet, PerfectHashSetConfig,
//! };
//!
//! let mut factory = HashFunctionFactory::from_seed(42);
//! let config = PerfectHashSetConfig::new().with_memory_ratio(4);
//!
//! let mut set = PerfectHashSet::with_config(config);
//! set.initialize(&[10, -20, 30], &mut factory).unwrap();
//!
//! assert!(set.contains(-20));
//! assert!(!set.contains(20));
//! ```
//!
//! # Construction
//!
//! 1. A top-level hash function partitions the n keys into n buckets. If the
//!    buckets would need more than `memory_ratio * n` slots in total, the
//!    partition is thrown away and another hash function is drawn.
//! 2. Each bucket with k keys gets k² slots and draws hash functions until no
//!    two of its keys share a slot.
//!
//! Both steps use the same retry loop; only the table size and what gets
//! stored on success differ.

// Module declarations
mod bucket;
mod config;
mod error;
mod hash;
mod set;
mod table;

/// The value type stored by the set.
pub type Key = i64;

// Re-exports
pub use bucket::Bucket;
pub use config::{DuplicatePolicy, PerfectHashSetConfig, MAX_MEMORY_RATIO, MIN_MEMORY_RATIO};
pub use error::{PerfectHashSetError, Result};
pub use hash::{HashFunction, HashFunctionFactory, HashSource, DEFAULT_SEED, PRIME_MODULUS};
pub use set::{PerfectHashSet, PerfectHashSetStats};
