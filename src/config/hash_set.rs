//! Hash set configuration module.
//!
//! Settings for building the perfect hash set: the seed of the hash function
//! factory, the memory-repletion ratio and the duplicate key policy.

use super::ConfigResult;
use super::Validate;
use crate::data_structures::perfect_hash_set::{
    DuplicatePolicy, HashFunctionFactory, PerfectHashSetConfig, DEFAULT_SEED, MAX_MEMORY_RATIO,
    MIN_MEMORY_RATIO,
};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Hash set configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashSetSettings {
    /// Seed for the hash function factory. Equal seeds give equal tables.
    pub seed: u64,

    /// Upper bound on total bucket slots as a multiple of the key count
    pub memory_ratio: usize,

    /// How repeated input keys are treated
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for HashSetSettings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            memory_ratio: PerfectHashSetConfig::default().memory_ratio(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl HashSetSettings {
    /// Configuration for the data structure itself.
    pub fn structure_config(&self) -> PerfectHashSetConfig {
        PerfectHashSetConfig::new()
            .with_memory_ratio(self.memory_ratio)
            .with_duplicate_policy(self.duplicate_policy)
    }

    /// A hash function factory seeded from these settings.
    pub fn factory(&self) -> HashFunctionFactory {
        HashFunctionFactory::from_seed(self.seed)
    }
}

impl Validate for HashSetSettings {
    fn validate(&self) -> ConfigResult<()> {
        if !(MIN_MEMORY_RATIO..=MAX_MEMORY_RATIO).contains(&self.memory_ratio) {
            return Err(ConfigError::ValueOutOfRange {
                key: "hash_set.memory_ratio".to_string(),
                message: format!(
                    "must be between {MIN_MEMORY_RATIO} and {MAX_MEMORY_RATIO}, got {}",
                    self.memory_ratio
                ),
            });
        }

        Ok(())
    }
}
