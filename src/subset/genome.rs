//! Binary selection genome and the GA individual wrapping it.

use rand::seq::index;
use rand::Rng;
use serde::Serialize;

use crate::ga::Individual;

/// Binary inclusion vector over the catalog: bit `i` set means item `i` is selected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Genome {
    bits: Vec<bool>,
}

impl Genome {
    /// Builds a genome of length `n` with exactly the given indices set.
    ///
    /// # Panics
    /// Panics if an index is `>= n`.
    pub fn from_indices(n: usize, indices: &[usize]) -> Self {
        let mut bits = vec![false; n];
        for &i in indices {
            bits[i] = true;
        }
        Self { bits }
    }

    /// Draws `k` distinct indices uniformly from `0..n` and sets them.
    ///
    /// # Panics
    /// Panics if `k > n`.
    pub fn random<R: Rng>(n: usize, k: usize, rng: &mut R) -> Self {
        let mut bits = vec![false; n];
        for i in index::sample(rng, n, k) {
            bits[i] = true;
        }
        Self { bits }
    }

    /// Genome length (N).
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the genome has no positions at all.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of selected items.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Selected item indices in ascending order.
    pub fn selected(&self) -> Vec<usize> {
        (0..self.bits.len()).filter(|&i| self.bits[i]).collect()
    }

    /// Raw inclusion bits, one per catalog item.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Mutable inclusion bits for in-place operators.
    ///
    /// The caller is responsible for restoring the cardinality afterwards.
    pub fn bits_mut(&mut self) -> &mut [bool] {
        &mut self.bits
    }
}

/// A genome plus its lazily computed fitness.
///
/// The only way to change the genome is [`genome_mut`](Self::genome_mut),
/// which drops the cached fitness, so a stale value is never observable.
#[derive(Debug, Clone, PartialEq)]
pub struct SubsetIndividual {
    genome: Genome,
    fitness: Option<f64>,
}

impl SubsetIndividual {
    /// Creates an unevaluated individual.
    pub fn new(genome: Genome) -> Self {
        Self {
            genome,
            fitness: None,
        }
    }

    /// The selection this individual encodes.
    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    /// Mutable access to the genome. Invalidates the fitness cache.
    pub fn genome_mut(&mut self) -> &mut Genome {
        self.fitness = None;
        &mut self.genome
    }
}

impl Individual for SubsetIndividual {
    type Fitness = f64;

    fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }
}
