//! Binary-string genetic operators.
//!
//! Crossover and mutation operators for bit-vector chromosomes. These
//! operate on `&mut [bool]` and are domain-agnostic: any selection or
//! inclusion problem can use them.
//!
//! Crossover operators work in place on two equal-length parents and may
//! change how many bits are set. Pair them with
//! [`repair_cardinality`](super::repair_cardinality) when the encoding has a
//! fixed number of ones.
//!
//! # Crossover Operators
//!
//! - [`one_point_crossover`]: exchange tails after one cut, O(n)
//! - [`two_point_crossover`]: exchange the segment between two cuts, O(n)
//! - [`uniform_crossover`]: exchange each position with fixed probability, O(n)
//!
//! # Mutation Operators
//!
//! - [`flip_bit_mutation`]: invert each bit with probability `indpb`, O(n)
//! - [`swap_mutation`]: exchange one set bit with one unset bit, O(n)
//! - [`scramble_mutation`]: shuffle a random contiguous segment, O(n)
//!
//! The closed operator families [`Crossover`] and [`Mutation`] name these
//! functions so that an experiment can be described as plain data.
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*, Ch. 4

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

// ============================================================================
// Crossover operators
// ============================================================================

/// One-point crossover.
///
/// Picks a cut `s` uniformly in `[1, n-1]` and exchanges `[s, n)` between
/// the parents. No-op for `n < 2`.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn one_point_crossover<R: Rng>(first: &mut [bool], second: &mut [bool], rng: &mut R) {
    let n = first.len();
    assert_eq!(n, second.len(), "parents must have equal length");
    if n < 2 {
        return;
    }
    let cut = rng.random_range(1..n);
    first[cut..].swap_with_slice(&mut second[cut..]);
}

/// Two-point crossover.
///
/// Picks `a` uniformly in `[1, n-2]` and `b` uniformly in `[a+1, n-1]`, then
/// exchanges `[a, b)`. No-op for `n < 3`.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn two_point_crossover<R: Rng>(first: &mut [bool], second: &mut [bool], rng: &mut R) {
    let n = first.len();
    assert_eq!(n, second.len(), "parents must have equal length");
    if n < 3 {
        return;
    }
    let a = rng.random_range(1..=n - 2);
    let b = rng.random_range(a + 1..=n - 1);
    first[a..b].swap_with_slice(&mut second[a..b]);
}

/// Uniform crossover: each position is exchanged independently with
/// probability `swap_prob`.
///
/// # Panics
/// Panics if the parents have different lengths or `swap_prob` is outside `[0, 1]`.
pub fn uniform_crossover<R: Rng>(
    first: &mut [bool],
    second: &mut [bool],
    swap_prob: f64,
    rng: &mut R,
) {
    assert_eq!(first.len(), second.len(), "parents must have equal length");
    for (a, b) in first.iter_mut().zip(second.iter_mut()) {
        if rng.random_bool(swap_prob) {
            std::mem::swap(a, b);
        }
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Flip-bit mutation: inverts each bit independently with probability `indpb`.
///
/// # Panics
/// Panics if `indpb` is outside `[0, 1]`.
pub fn flip_bit_mutation<R: Rng>(bits: &mut [bool], indpb: f64, rng: &mut R) {
    for bit in bits.iter_mut() {
        if rng.random_bool(indpb) {
            *bit = !*bit;
        }
    }
}

/// Swap mutation: exchanges one random set bit with one random unset bit.
///
/// Preserves the number of ones. No-op when all bits are equal.
pub fn swap_mutation<R: Rng>(bits: &mut [bool], rng: &mut R) {
    let (ones, zeros): (Vec<usize>, Vec<usize>) = (0..bits.len()).partition(|&i| bits[i]);
    if ones.is_empty() || zeros.is_empty() {
        return;
    }
    let i = ones[rng.random_range(0..ones.len())];
    let j = zeros[rng.random_range(0..zeros.len())];
    bits.swap(i, j);
}

/// Scramble mutation: shuffles the segment `[a, b)` with `a` uniform in
/// `[0, n-2]` and `b` uniform in `[a+1, n-1]`.
///
/// Preserves the number of ones. No-op for `n < 2`.
pub fn scramble_mutation<R: Rng>(bits: &mut [bool], rng: &mut R) {
    let n = bits.len();
    if n < 2 {
        return;
    }
    let a = rng.random_range(0..=n - 2);
    let b = rng.random_range(a + 1..=n - 1);
    bits[a..b].shuffle(rng);
}

// ============================================================================
// Operator families
// ============================================================================

/// Crossover operator chosen for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Crossover {
    /// [`one_point_crossover`]
    OnePoint,
    /// [`two_point_crossover`]
    TwoPoint,
    /// [`uniform_crossover`] with swap probability 0.5
    Uniform,
}

impl Crossover {
    /// Every crossover operator, in declaration order.
    pub const ALL: [Crossover; 3] = [Crossover::OnePoint, Crossover::TwoPoint, Crossover::Uniform];

    /// Applies the operator to two equal-length bit vectors in place.
    pub fn apply<R: Rng>(self, first: &mut [bool], second: &mut [bool], rng: &mut R) {
        match self {
            Crossover::OnePoint => one_point_crossover(first, second, rng),
            Crossover::TwoPoint => two_point_crossover(first, second, rng),
            Crossover::Uniform => uniform_crossover(first, second, 0.5, rng),
        }
    }

    /// Short identifier, e.g. `"one_point"`.
    pub fn name(self) -> &'static str {
        match self {
            Crossover::OnePoint => "one_point",
            Crossover::TwoPoint => "two_point",
            Crossover::Uniform => "uniform",
        }
    }
}

impl fmt::Display for Crossover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mutation operator chosen for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mutation {
    /// [`flip_bit_mutation`]
    FlipBit,
    /// [`swap_mutation`]
    Swap,
    /// [`scramble_mutation`]
    Scramble,
}

impl Mutation {
    /// Every mutation operator, in declaration order.
    pub const ALL: [Mutation; 3] = [Mutation::FlipBit, Mutation::Swap, Mutation::Scramble];

    /// Applies the operator in place.
    ///
    /// `flip_rate` is the per-bit probability used by [`Mutation::FlipBit`]
    /// and ignored by the others.
    pub fn apply<R: Rng>(self, bits: &mut [bool], flip_rate: f64, rng: &mut R) {
        match self {
            Mutation::FlipBit => flip_bit_mutation(bits, flip_rate, rng),
            Mutation::Swap => swap_mutation(bits, rng),
            Mutation::Scramble => scramble_mutation(bits, rng),
        }
    }

    /// Short identifier, e.g. `"flip_bit"`.
    pub fn name(self) -> &'static str {
        match self {
            Mutation::FlipBit => "flip_bit",
            Mutation::Swap => "swap",
            Mutation::Scramble => "scramble",
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Tests
// ============================================================================
