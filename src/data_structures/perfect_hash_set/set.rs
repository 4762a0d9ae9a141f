// Copyright (c) 2025 Fixed Set Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Top level of the two-level perfect hash set.

use std::collections::HashSet;

use tracing::debug;

use crate::data_structures::perfect_hash_set::bucket::Bucket;
use crate::data_structures::perfect_hash_set::config::{DuplicatePolicy, PerfectHashSetConfig};
use crate::data_structures::perfect_hash_set::error::{PerfectHashSetError, Result};
use crate::data_structures::perfect_hash_set::hash::HashSource;
use crate::data_structures::perfect_hash_set::table::{
    build_level, sum_of_squares, Level, Placement,
};
use crate::data_structures::perfect_hash_set::Key;

/// Level that partitions keys into `n` buckets and accepts a partition only
/// when the buckets together need at most `budget` slots.
struct BucketLevel {
    budget: usize,
}

impl Level for BucketLevel {
    type Table = Vec<Bucket>;

    fn table_size(&self, len: usize) -> usize {
        len
    }

    fn try_fill<S: HashSource>(
        &self,
        keys: &[Key],
        placement: &Placement,
        counts: &[usize],
        source: &mut S,
    ) -> Option<Self::Table> {
        let cost = sum_of_squares(counts);
        if cost > self.budget {
            debug!(cost, budget = self.budget, "partition over slot budget, redrawing");
            return None;
        }
        let buckets = placement
            .partition(keys, counts)
            .iter()
            .map(|group| Bucket::build(group, &mut *source))
            .collect();
        Some(buckets)
    }
}

/// Build statistics of a [`PerfectHashSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerfectHashSetStats {
    /// Number of distinct keys stored
    pub len: usize,
    /// Number of top-level buckets (equal to `len`)
    pub bucket_count: usize,
    /// Total slots over all buckets, `Σ k_i²`
    pub slot_count: usize,
    /// Memory-repletion ratio the set was built with
    pub memory_ratio: usize,
    /// Top-level hash functions drawn
    pub top_level_attempts: usize,
    /// Bucket hash functions drawn, summed over the accepted partition
    pub bucket_attempts: usize,
    /// Keys in the fullest bucket
    pub largest_bucket: usize,
}

/// A static set of integers answering membership in constant worst-case time.
///
/// Keys are spread over `n` buckets by a top-level hash function; each bucket
/// then stores its `k` keys collision-free in `k²` slots. Lookups cost one
/// evaluation at each level.
///
/// The set moves from uninitialized to initialized exactly once. Querying an
/// uninitialized set is a contract violation that panics in debug builds.
///
/// # Examples
///
/// ```
/// use fixed_set_lib::data_structures::perfect_hash_set::{HashFunctionFactory, PerfectHashSet};
///
/// let mut factory = HashFunctionFactory::from_seed(42);
/// let set = PerfectHashSet::build(&[1, 2, 3, 1_000_000_007], &mut factory).unwrap();
///
/// assert!(set.contains(2));
/// assert!(!set.contains(4));
/// assert!(set.contains(1_000_000_007));
/// assert!(!set.contains(-5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PerfectHashSet {
    config: PerfectHashSetConfig,
    placement: Option<Placement>,
    buckets: Vec<Bucket>,
    top_level_attempts: usize,
    initialized: bool,
}

impl PerfectHashSet {
    /// Creates an uninitialized set with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an uninitialized set with the given configuration.
    pub fn with_config(config: PerfectHashSetConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Builds a set over `keys` with default configuration.
    pub fn build<S: HashSource>(keys: &[Key], source: &mut S) -> Result<Self> {
        let mut set = Self::new();
        set.initialize(keys, source)?;
        Ok(set)
    }

    /// Builds the table over `keys`, drawing hash functions from `source`.
    ///
    /// Collisions and over-budget partitions are retried until they succeed.
    /// Errors are only returned for a second call or for duplicate keys under
    /// [`DuplicatePolicy::Reject`].
    pub fn initialize<S: HashSource>(&mut self, keys: &[Key], source: &mut S) -> Result<()> {
        if self.initialized {
            return Err(PerfectHashSetError::AlreadyInitialized);
        }
        let keys = self.distinct_keys(keys)?;

        if keys.is_empty() {
            debug!("empty input, no hashing needed");
            self.initialized = true;
            return Ok(());
        }

        let level = BucketLevel {
            budget: self.config.slot_budget(keys.len()),
        };
        let built = build_level(&level, &keys, source);
        self.placement = Some(built.placement);
        self.buckets = built.table;
        self.top_level_attempts = built.attempts;
        self.initialized = true;

        let stats = self.stats();
        debug!(
            keys = stats.len,
            slots = stats.slot_count,
            top_level_attempts = stats.top_level_attempts,
            bucket_attempts = stats.bucket_attempts,
            largest_bucket = stats.largest_bucket,
            "perfect hash set built"
        );
        Ok(())
    }

    fn distinct_keys(&self, keys: &[Key]) -> Result<Vec<Key>> {
        let mut seen = HashSet::with_capacity(keys.len());
        let mut distinct = Vec::with_capacity(keys.len());
        for &key in keys {
            if seen.insert(key) {
                distinct.push(key);
            } else if self.config.duplicate_policy() == DuplicatePolicy::Reject {
                return Err(PerfectHashSetError::DuplicateKey(key));
            }
        }
        if distinct.len() < keys.len() {
            debug!(dropped = keys.len() - distinct.len(), "dropped duplicate keys");
        }
        Ok(distinct)
    }

    /// Returns whether `key` is a member.
    #[inline]
    pub fn contains(&self, key: Key) -> bool {
        debug_assert!(self.initialized, "contains called before initialize");
        match &self.placement {
            Some(placement) => self.buckets[placement.position(key)].contains(key),
            None => false,
        }
    }

    /// Answers membership for each key in order.
    pub fn contains_all<I: IntoIterator<Item = Key>>(&self, keys: I) -> Vec<bool> {
        keys.into_iter().map(|key| self.contains(key)).collect()
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the set stores no keys.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Whether [`initialize`](Self::initialize) has completed.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The configuration the set was created with.
    pub fn config(&self) -> &PerfectHashSetConfig {
        &self.config
    }

    /// The buckets in top-level order.
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Collects build statistics.
    pub fn stats(&self) -> PerfectHashSetStats {
        PerfectHashSetStats {
            len: self.len(),
            bucket_count: self.buckets.len(),
            slot_count: self.buckets.iter().map(Bucket::slot_count).sum(),
            memory_ratio: self.config.memory_ratio(),
            top_level_attempts: self.top_level_attempts,
            bucket_attempts: self.buckets.iter().map(Bucket::attempts).sum(),
            largest_bucket: self.buckets.iter().map(Bucket::len).max().unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::perfect_hash_set::hash::{HashFunction, HashFunctionFactory};
    use crate::tests::test_utils::ScriptedHashes;

    #[test]
    fn test_empty_input() {
        let mut factory = HashFunctionFactory::default();
        let set = PerfectHashSet::build(&[], &mut factory).unwrap();
        assert!(set.is_initialized());
        assert!(set.is_empty());
        assert!(!set.contains(0));
        assert!(!set.contains(i64::MAX));
        assert_eq!(set.stats(), PerfectHashSetStats {
            memory_ratio: 4,
            ..PerfectHashSetStats::default()
        });
    }

    #[test]
    fn test_empty_input_draws_no_hash() {
        let mut source = ScriptedHashes::new(Vec::new());
        PerfectHashSet::build(&[], &mut source).unwrap();
        assert_eq!(source.drawn(), 0);
    }

    #[test]
    fn test_single_element() {
        let mut factory = HashFunctionFactory::default();
        let set = PerfectHashSet::build(&[5], &mut factory).unwrap();
        assert!(set.contains(5));
        assert!(!set.contains(6));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_reference_example() {
        let mut factory = HashFunctionFactory::default();
        let set = PerfectHashSet::build(&[1, 2, 3, 1_000_000_007], &mut factory).unwrap();
        assert_eq!(
            set.contains_all([2, 4, 1_000_000_007, -5]),
            vec![true, false, true, false]
        );
    }

    #[test]
    fn test_second_initialize_is_rejected() {
        let mut factory = HashFunctionFactory::default();
        let mut set = PerfectHashSet::new();
        set.initialize(&[1, 2], &mut factory).unwrap();
        assert_eq!(
            set.initialize(&[3], &mut factory),
            Err(PerfectHashSetError::AlreadyInitialized)
        );
        assert!(set.contains(1));
        assert!(!set.contains(3));
    }

    #[test]
    fn test_duplicates_are_dropped_by_default() {
        let mut factory = HashFunctionFactory::default();
        let set = PerfectHashSet::build(&[7, 7, 8, 7, 8], &mut factory).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(7));
        assert!(set.contains(8));
        assert!(!set.contains(9));
    }

    #[test]
    fn test_duplicates_are_rejected_on_request() {
        let mut factory = HashFunctionFactory::default();
        let config = PerfectHashSetConfig::new().with_duplicate_policy(DuplicatePolicy::Reject);
        let mut set = PerfectHashSet::with_config(config);
        assert_eq!(
            set.initialize(&[1, 2, 1], &mut factory),
            Err(PerfectHashSetError::DuplicateKey(1))
        );
        assert!(!set.is_initialized());
    }

    #[test]
    fn test_degenerate_top_level_hash_is_redrawn() {
        // a = 0 puts every key in one bucket: Σk² = n² > 4n for n = 8.
        let mut source = ScriptedHashes::new(vec![HashFunction::new(0, 0)]);
        let keys: Vec<Key> = (1..=8).collect();
        let set = PerfectHashSet::build(&keys, &mut source).unwrap();
        assert!(set.stats().top_level_attempts >= 2);
        for key in keys {
            assert!(set.contains(key));
        }
    }

    #[test]
    fn test_memory_bound_holds() {
        let mut factory = HashFunctionFactory::from_seed(2024);
        let keys: Vec<Key> = (0..2_000).map(|i| i * 7_919 - 1_000_000).collect();
        let set = PerfectHashSet::build(&keys, &mut factory).unwrap();
        let stats = set.stats();
        assert_eq!(stats.bucket_count, keys.len());
        assert!(stats.slot_count <= stats.memory_ratio * keys.len());
        for bucket in set.buckets() {
            assert_eq!(bucket.slot_count(), bucket.len() * bucket.len());
        }
        assert_eq!(set.buckets().iter().map(Bucket::len).sum::<usize>(), keys.len());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "contains called before initialize")]
    fn test_contains_before_initialize_panics() {
        let set = PerfectHashSet::new();
        set.contains(1);
    }
}
