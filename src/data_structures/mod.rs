//! Data structures for fixed-set membership.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Immutable after construction, so shared read-only access needs no locking
//! - Randomness injected by the caller, never hidden in globals

pub mod perfect_hash_set;

// Re-export common data structures
pub use perfect_hash_set::{
    HashFunctionFactory, PerfectHashSet, PerfectHashSetConfig, PerfectHashSetError,
};
