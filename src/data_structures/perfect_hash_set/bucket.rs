// Copyright (c) 2025 Fixed Set Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Second-level tables: `k` keys stored collision-free in `k²` slots.

use tracing::trace;

use crate::data_structures::perfect_hash_set::hash::HashSource;
use crate::data_structures::perfect_hash_set::table::{build_level, Level, Placement};
use crate::data_structures::perfect_hash_set::Key;

/// Level that stores raw keys and accepts only collision-free placements.
struct SlotLevel;

impl Level for SlotLevel {
    type Table = Vec<Option<Key>>;

    fn table_size(&self, len: usize) -> usize {
        len.saturating_mul(len)
    }

    fn try_fill<S: HashSource>(
        &self,
        keys: &[Key],
        placement: &Placement,
        counts: &[usize],
        _source: &mut S,
    ) -> Option<Self::Table> {
        if counts.iter().any(|&count| count > 1) {
            return None;
        }
        let mut slots = vec![None; placement.size()];
        for &key in keys {
            slots[placement.position(key)] = Some(key);
        }
        Some(slots)
    }
}

/// A perfect hash table over the keys that share one top-level bucket.
///
/// Every stored key owns a distinct slot. Slots not owned by a key are `None`,
/// so any `i64` including zero or `i64::MIN` can be stored.
#[derive(Debug, Clone, Default)]
pub struct Bucket {
    placement: Option<Placement>,
    slots: Vec<Option<Key>>,
    len: usize,
    attempts: usize,
}

impl Bucket {
    /// Builds a bucket over `keys`, drawing hash functions from `source` until
    /// no two keys share a slot.
    ///
    /// `keys` must not contain duplicates: no hash function separates equal
    /// keys, so the retry loop would never finish.
    pub fn build<S: HashSource>(keys: &[Key], source: &mut S) -> Self {
        if keys.is_empty() {
            return Self::default();
        }
        let built = build_level(&SlotLevel, keys, source);
        trace!(
            keys = keys.len(),
            slots = built.placement.size(),
            attempts = built.attempts,
            "bucket built"
        );
        Self {
            placement: Some(built.placement),
            slots: built.table,
            len: keys.len(),
            attempts: built.attempts,
        }
    }

    /// Returns whether `key` is stored in this bucket.
    #[inline]
    pub fn contains(&self, key: Key) -> bool {
        match &self.placement {
            Some(placement) => self.slots[placement.position(key)] == Some(key),
            None => false,
        }
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the bucket stores no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots, always the square of [`len`](Self::len).
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Hash functions drawn before one was collision-free (zero when empty).
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}
