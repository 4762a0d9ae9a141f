// Copyright (c) 2025 Fixed Set Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Retry-until-accepted construction shared by both table levels.
//!
//! A level only decides two things: how many positions a table over `len`
//! keys gets, and what to build once a hash function's distribution of keys
//! over those positions is acceptable. Drawing hash functions, computing the
//! distribution and looping until a level accepts is the same everywhere and
//! lives here.

use crate::data_structures::perfect_hash_set::hash::{HashFunction, HashSource};
use crate::data_structures::perfect_hash_set::Key;

/// A hash function bound to a table size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placement {
    hash: HashFunction,
    size: usize,
}

impl Placement {
    pub(crate) fn new(hash: HashFunction, size: usize) -> Self {
        Self { hash, size }
    }

    /// Position of `key` in `0..size`.
    #[inline]
    pub(crate) fn position(&self, key: Key) -> usize {
        self.hash.index(key, self.size)
    }

    #[cfg(test)]
    pub(crate) fn hash(&self) -> &HashFunction {
        &self.hash
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    /// Number of keys landing on each position.
    pub(crate) fn distribution(&self, keys: &[Key]) -> Vec<usize> {
        let mut counts = vec![0usize; self.size];
        for &key in keys {
            counts[self.position(key)] += 1;
        }
        counts
    }

    /// Splits `keys` by position, each group reserved to its exact count.
    pub(crate) fn partition(&self, keys: &[Key], counts: &[usize]) -> Vec<Vec<Key>> {
        let mut groups: Vec<Vec<Key>> = counts.iter().map(|&c| Vec::with_capacity(c)).collect();
        for &key in keys {
            groups[self.position(key)].push(key);
        }
        groups
    }
}

/// `Σ count²`, the number of slots second-level tables would need.
pub(crate) fn sum_of_squares(counts: &[usize]) -> usize {
    counts.iter().fold(0usize, |acc, &c| acc.saturating_add(c.saturating_mul(c)))
}

/// One tier of the two-level table.
pub(crate) trait Level {
    /// What the level stores once a placement is accepted.
    type Table;

    /// Number of positions for a table over `len` keys.
    fn table_size(&self, len: usize) -> usize;

    /// Builds the table for `placement`, or returns `None` to have the
    /// placement discarded and a new hash function drawn.
    fn try_fill<S: HashSource>(
        &self,
        keys: &[Key],
        placement: &Placement,
        counts: &[usize],
        source: &mut S,
    ) -> Option<Self::Table>;
}

/// An accepted placement together with the table built from it.
#[derive(Debug)]
pub(crate) struct Built<T> {
    pub(crate) placement: Placement,
    pub(crate) table: T,
    pub(crate) attempts: usize,
}

/// Draws hash functions until `level` accepts one.
///
/// There is no cap on attempts. For distinct keys under a universal family
/// each attempt succeeds with constant probability. `keys` must be non-empty.
pub(crate) fn build_level<L: Level, S: HashSource>(
    level: &L,
    keys: &[Key],
    source: &mut S,
) -> Built<L::Table> {
    debug_assert!(!keys.is_empty(), "empty tables are never hashed");
    let size = level.table_size(keys.len());
    let mut attempts = 0usize;
    loop {
        attempts += 1;
        let placement = Placement::new(source.next_hash(), size);
        let counts = placement.distribution(keys);
        if let Some(table) = level.try_fill(keys, &placement, &counts, source) {
            return Built {
                placement,
                table,
                attempts,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::perfect_hash_set::hash::HashFunctionFactory;
    use crate::tests::test_utils::ScriptedHashes;

    /// Accepts any placement without collisions and records positions.
    struct Injective;

    impl Level for Injective {
        type Table = Vec<usize>;

        fn table_size(&self, len: usize) -> usize {
            len * len
        }

        fn try_fill<S: HashSource>(
            &self,
            keys: &[Key],
            placement: &Placement,
            counts: &[usize],
            _source: &mut S,
        ) -> Option<Vec<usize>> {
            if counts.iter().any(|&c| c > 1) {
                return None;
            }
            Some(keys.iter().map(|&k| placement.position(k)).collect())
        }
    }

    #[test]
    fn test_distribution_counts_every_key() {
        let placement = Placement::new(HashFunction::new(1, 0), 4);
        let counts = placement.distribution(&[0, 1, 2, 3, 4, 8]);
        assert_eq!(counts, vec![3, 1, 1, 1]);
        assert_eq!(counts.iter().sum::<usize>(), 6);
    }

    #[test]
    fn test_partition_matches_distribution() {
        let placement = Placement::new(HashFunction::new(1, 0), 3);
        let keys = [0, 1, 2, 3, 4, 5, 6];
        let counts = placement.distribution(&keys);
        let groups = placement.partition(&keys, &counts);
        assert_eq!(groups, vec![vec![0, 3, 6], vec![1, 4], vec![2, 5]]);
        for (group, &count) in groups.iter().zip(&counts) {
            assert_eq!(group.len(), count);
        }
    }

    #[test]
    fn test_sum_of_squares() {
        assert_eq!(sum_of_squares(&[]), 0);
        assert_eq!(sum_of_squares(&[0, 1, 2, 3]), 14);
        assert_eq!(sum_of_squares(&[usize::MAX]), usize::MAX);
    }

    #[test]
    fn test_build_level_retries_rejected_placements() {
        // Two degenerate hashes first, then a real one.
        let mut source = ScriptedHashes::new(vec![HashFunction::new(0, 1), HashFunction::new(0, 2)]);
        let built = build_level(&Injective, &[10, 20, 30], &mut source);
        assert!(built.attempts >= 3);
        assert_eq!(built.placement.size(), 9);
        let mut positions = built.table.clone();
        positions.sort_unstable();
        positions.dedup();
        assert_eq!(positions.len(), 3);
    }

    #[test]
    fn test_build_level_with_random_source() {
        let mut factory = HashFunctionFactory::from_seed(3);
        let keys: Vec<Key> = (0..50).map(|i| i * 1_000_003 - 17).collect();
        let built = build_level(&Injective, &keys, &mut factory);
        assert!(built.attempts >= 1);
        assert_eq!(built.table.len(), keys.len());
        assert_ne!(built.placement.hash().multiplier(), 0);
    }
}
