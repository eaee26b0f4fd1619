//! Tournament selection.
//!
//! Each tournament draws `k` distinct contestants uniformly at random and
//! keeps the fittest. Tournaments are independent, so the same individual
//! can win several times.
//!
//! Ties between equally fit contestants go to the lowest population index,
//! which keeps the outcome a pure function of the random draws.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::seq::index;
use rand::Rng;

use super::types::Individual;

/// Runs `output_size` tournaments of size `k` and returns the winners'
/// population indices, in tournament order.
///
/// `k` is clamped to `1..=population.len()`.
///
/// # Panics
/// Panics if `population` is empty or any contestant is unevaluated.
pub fn tournament_select<I: Individual, R: Rng>(
    population: &[I],
    output_size: usize,
    k: usize,
    rng: &mut R,
) -> Vec<usize> {
    (0..output_size)
        .map(|_| tournament(population, k, rng))
        .collect()
}

/// Runs one tournament and returns the winner's index.
///
/// # Panics
/// Panics if `population` is empty or any contestant is unevaluated.
pub fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    assert!(!population.is_empty(), "cannot select from empty population");

    let n = population.len();
    let k = k.clamp(1, n);

    let mut best: Option<(usize, I::Fitness)> = None;
    for idx in index::sample(rng, n, k) {
        let f = population[idx].evaluated_fitness();
        match best {
            Some((best_idx, best_f)) if !(f > best_f || (f == best_f && idx < best_idx)) => {}
            _ => best = Some((idx, f)),
        }
    }
    best.map(|(idx, _)| idx)
        .expect("tournament draws at least one contestant")
}
