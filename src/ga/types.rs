//! Core trait definitions for the GA framework.
//!
//! The two central traits, [`Individual`] and [`GaProblem`], define the
//! contract between the generic GA engine and domain-specific problem
//! implementations.

use rand::Rng;

use super::runner::GenerationStats;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// **Higher fitness is considered better** (maximization).
///
/// A built-in implementation exists for `f64`.
pub trait Fitness: PartialOrd + Copy + std::fmt::Debug + 'static {
    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution in the GA population.
///
/// Fitness is a cache derived from the genome. It is `None` until the
/// framework evaluates the individual and must be reset to `None` whenever
/// the genome changes, so a stale value can never be observed.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct MySolution {
///     genes: Vec<f64>,
///     fitness: Option<f64>,
/// }
///
/// impl MySolution {
///     fn genes_mut(&mut self) -> &mut Vec<f64> {
///         self.fitness = None;
///         &mut self.genes
///     }
/// }
///
/// impl Individual for MySolution {
///     type Fitness = f64;
///     fn fitness(&self) -> Option<f64> { self.fitness }
///     fn set_fitness(&mut self, f: f64) { self.fitness = Some(f); }
/// }
/// ```
pub trait Individual: Clone {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the cached fitness, or `None` if the individual has not been
    /// evaluated since its last change.
    fn fitness(&self) -> Option<Self::Fitness>;

    /// Stores a freshly computed fitness.
    ///
    /// Called by the GA framework after evaluation.
    fn set_fitness(&mut self, fitness: Self::Fitness);

    /// Returns the cached fitness.
    ///
    /// # Panics
    /// Panics if the individual has not been evaluated. Reading fitness
    /// before evaluation is a defect in the caller.
    fn evaluated_fitness(&self) -> Self::Fitness {
        self.fitness()
            .expect("fitness read before the individual was evaluated")
    }
}

/// Defines a GA optimization problem.
///
/// A problem supplies the representation-specific hooks and the runner
/// drives the generational loop around them:
///
/// 1. **Initialization**: How to create random individuals
/// 2. **Evaluation**: How to compute fitness
/// 3. **Crossover**: How to recombine two individuals in place
/// 4. **Mutation**: How to perturb an individual
/// 5. **Repair**: How to restore a representation invariant after 3 or 4
///
/// Every operator receives the run's single random source, so a seeded run
/// is fully reproducible.
pub trait GaProblem {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual.
    ///
    /// Called `population_size` times at start-up. The result must satisfy
    /// every representation invariant that [`repair`](Self::repair) restores.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual and returns its fitness.
    ///
    /// Higher fitness values are considered better (maximization).
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Recombines two individuals in place.
    ///
    /// The default implementation leaves both unchanged.
    fn crossover<R: Rng>(
        &self,
        _first: &mut Self::Individual,
        _second: &mut Self::Individual,
        _rng: &mut R,
    ) {
    }

    /// Mutates an individual in place.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Restores any representation invariant broken by crossover or mutation.
    ///
    /// Called on both children after every applied crossover and on each
    /// individual after every applied mutation. Must be idempotent.
    /// The default implementation is a no-op.
    fn repair<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called at the end of each generation with that generation's statistics.
    ///
    /// Hook for progress reporting. The default implementation is a no-op.
    fn on_generation(&self, _stats: &GenerationStats) {}
}
