// Copyright (c) 2025 Fixed Set Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Universal hash family for the perfect hash set.
//!
//! Every level of the table uses functions of the form `h(x) = (a*x + b) mod P`
//! where `P` is the smallest prime above `2^64`. Keys are reinterpreted as
//! `u64` before hashing, so two distinct keys are always distinct residues
//! modulo `P` and any `a != 0` separates them. That is what makes the retry
//! loops terminate with probability 1.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::data_structures::perfect_hash_set::Key;

/// The modulus of the hash family, `2^64 + 13`.
///
/// With `a < 2^64` and `x < 2^64`, `a*x + b` stays below `2^128`, so evaluation
/// in `u128` cannot overflow.
pub const PRIME_MODULUS: u128 = (1u128 << 64) + 13;

/// Seed used when nothing else is configured.
pub const DEFAULT_SEED: u64 = 42;

/// A single member of the `(a*x + b) mod P` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashFunction {
    multiplier: u64,
    increment: u128,
}

impl HashFunction {
    /// Creates a hash function from explicit coefficients.
    ///
    /// `increment` is reduced modulo [`PRIME_MODULUS`]. A zero multiplier is
    /// accepted but maps every key to the same value, so construction will
    /// reject it and draw another.
    pub fn new(multiplier: u64, increment: u128) -> Self {
        Self {
            multiplier,
            increment: increment % PRIME_MODULUS,
        }
    }

    /// The `a` coefficient.
    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// The `b` coefficient.
    pub fn increment(&self) -> u128 {
        self.increment
    }

    /// Evaluates `(a*x + b) mod P`. The result is always below [`PRIME_MODULUS`].
    #[inline]
    pub fn eval(&self, key: Key) -> u128 {
        let x = key as u64 as u128;
        (self.multiplier as u128 * x + self.increment) % PRIME_MODULUS
    }

    /// Reduces the hash of `key` into `0..size`.
    ///
    /// `size` must be non-zero.
    #[inline]
    pub fn index(&self, key: Key, size: usize) -> usize {
        debug_assert!(size > 0, "cannot index into an empty table");
        (self.eval(key) % size as u128) as usize
    }
}

/// Anything that can hand out fresh hash functions on demand.
///
/// Construction only ever asks for "the next candidate"; it never manages a
/// random generator itself.
pub trait HashSource {
    /// Returns the next candidate hash function.
    fn next_hash(&mut self) -> HashFunction;
}

impl<S: HashSource + ?Sized> HashSource for &mut S {
    fn next_hash(&mut self) -> HashFunction {
        (**self).next_hash()
    }
}

/// Draws uniformly random coefficients from a seedable generator.
///
/// # Examples
///
/// ```
/// use fixed_set_lib::data_structures::perfect_hash_set::HashFunctionFactory;
///
/// let mut left = HashFunctionFactory::from_seed(7);
/// let mut right = HashFunctionFactory::from_seed(7);
/// assert_eq!(left.next_hash(), right.next_hash());
/// ```
#[derive(Debug, Clone)]
pub struct HashFunctionFactory<R = ChaCha8Rng> {
    rng: R,
}

impl HashFunctionFactory<ChaCha8Rng> {
    /// Creates a reproducible factory from a 64-bit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for HashFunctionFactory<ChaCha8Rng> {
    fn default() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }
}

impl<R: Rng> HashFunctionFactory<R> {
    /// Wraps an existing random generator.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draws the next hash function.
    pub fn next_hash(&mut self) -> HashFunction {
        let multiplier = self.rng.gen_range(1..=u64::MAX);
        let increment = self.rng.gen_range(0..PRIME_MODULUS);
        HashFunction::new(multiplier, increment)
    }
}

impl<R: Rng> HashSource for HashFunctionFactory<R> {
    fn next_hash(&mut self) -> HashFunction {
        HashFunctionFactory::next_hash(self)
    }
}
