//! Subset-selection GA problem definition.
//!
//! Implements [`GaProblem`] for choosing exactly K catalog items.
//! Bridges the catalog model to the generic GA framework.

use rand::Rng;
use serde::Serialize;

use super::fitness::{worst_case_score, Evaluation, FitnessEvaluator};
use super::genome::{Genome, SubsetIndividual};
use crate::catalog::{Catalog, TargetProfile};
use crate::error::ConfigError;
use crate::ga::{repair_cardinality, Crossover, GaProblem, Mutation};

/// A selected subset decoded back into catalog terms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionSummary {
    /// Selected item indices, ascending.
    pub selected_indices: Vec<usize>,
    /// Names of the selected items, in index order.
    pub selected_item_names: Vec<String>,
    pub total_cost: f64,
    pub attribute_totals: Vec<f64>,
    /// Deviation without budget penalty.
    pub deviation: f64,
    pub fitness: f64,
    pub in_budget: bool,
}

/// Choose exactly `subset_size` items from `catalog` so that their attribute
/// totals approach `target` while their cost stays within its budget.
///
/// Construction validates the whole problem, so a `SubsetProblem` value is
/// always runnable by both [`GaRunner`](crate::ga::GaRunner) and
/// [`ExhaustiveOracle`](crate::oracle::ExhaustiveOracle).
///
/// # Example
/// ```
/// use u_subset::catalog::{Catalog, Item, TargetProfile};
/// use u_subset::ga::{Crossover, GaConfig, GaRunner, Mutation};
/// use u_subset::subset::SubsetProblem;
///
/// let catalog = Catalog::new(vec![
///     Item::new("a", 10.0, vec![1.0]),
///     Item::new("b", 20.0, vec![2.0]),
///     Item::new("c", 30.0, vec![3.0]),
///     Item::new("d", 40.0, vec![4.0]),
/// ])
/// .unwrap();
/// let target = TargetProfile::new(vec![5.0], 0.0, 100.0).unwrap();
/// let problem = SubsetProblem::new(catalog, target, 2)
///     .unwrap()
///     .with_operators(Crossover::Uniform, Mutation::Swap);
///
/// let config = GaConfig::default().with_population_size(10).with_seed(1);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.best().genome().count_ones(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SubsetProblem {
    catalog: Catalog,
    target: TargetProfile,
    subset_size: usize,
    crossover: Crossover,
    mutation: Mutation,
    flip_bit_rate: f64,
}

impl SubsetProblem {
    /// Validates and builds a problem with one-point crossover, flip-bit
    /// mutation and a flip-bit rate of `1 / N`.
    pub fn new(
        catalog: Catalog,
        target: TargetProfile,
        subset_size: usize,
    ) -> Result<Self, ConfigError> {
        target.validate()?;
        if target.dimension() != catalog.dimension() {
            return Err(ConfigError::DimensionMismatch {
                context: "target profile".into(),
                expected: catalog.dimension(),
                found: target.dimension(),
            });
        }
        if !worst_case_score(&catalog, &target).is_finite() {
            return Err(ConfigError::ScoreOverflow);
        }
        if subset_size == 0 || subset_size > catalog.len() {
            return Err(ConfigError::InvalidSubsetSize {
                subset_size,
                catalog_len: catalog.len(),
            });
        }

        let flip_bit_rate = 1.0 / catalog.len() as f64;
        Ok(Self {
            catalog,
            target,
            subset_size,
            crossover: Crossover::OnePoint,
            mutation: Mutation::FlipBit,
            flip_bit_rate,
        })
    }

    /// Sets the crossover and mutation operators used by the GA.
    pub fn with_operators(mut self, crossover: Crossover, mutation: Mutation) -> Self {
        self.crossover = crossover;
        self.mutation = mutation;
        self
    }

    /// Sets the per-bit probability of flip-bit mutation.
    pub fn with_flip_bit_rate(mut self, rate: f64) -> Self {
        self.flip_bit_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Catalog the subset is drawn from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Target totals and budget interval.
    pub fn target(&self) -> &TargetProfile {
        &self.target
    }

    /// Number of items to select (K).
    pub fn subset_size(&self) -> usize {
        self.subset_size
    }

    /// Crossover applied to each selected pair.
    pub fn crossover_op(&self) -> Crossover {
        self.crossover
    }

    /// Mutation applied to each offspring.
    pub fn mutation_op(&self) -> Mutation {
        self.mutation
    }

    /// Per-bit probability used by [`Mutation::FlipBit`].
    pub fn flip_bit_rate(&self) -> f64 {
        self.flip_bit_rate
    }

    /// Fitness evaluator borrowing this problem's catalog and target.
    pub fn evaluator(&self) -> FitnessEvaluator<'_> {
        FitnessEvaluator::new(&self.catalog, &self.target)
    }

    /// Full evaluation of a genome.
    pub fn evaluate_genome(&self, genome: &Genome) -> Evaluation {
        self.evaluator().evaluate(genome)
    }

    /// Decodes a genome into item names, totals, deviation and fitness.
    pub fn decode(&self, genome: &Genome) -> SolutionSummary {
        let eval = self.evaluate_genome(genome);
        let selected_indices = genome.selected();
        let selected_item_names = selected_indices
            .iter()
            .map(|&i| self.catalog.item(i).name.clone())
            .collect();
        SolutionSummary {
            selected_indices,
            selected_item_names,
            total_cost: eval.total_cost,
            attribute_totals: eval.attribute_totals,
            deviation: eval.deviation,
            fitness: eval.fitness,
            in_budget: eval.in_budget,
        }
    }

    /// Asserts that a genome has length N and exactly K ones.
    ///
    /// # Panics
    /// Panics on violation; a wrong-sized genome here is a defect.
    pub fn assert_invariant(&self, genome: &Genome) {
        assert_eq!(
            genome.len(),
            self.catalog.len(),
            "genome length must equal catalog size"
        );
        assert_eq!(
            genome.count_ones(),
            self.subset_size,
            "genome must select exactly {} items",
            self.subset_size
        );
    }
}

impl GaProblem for SubsetProblem {
    type Individual = SubsetIndividual;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> SubsetIndividual {
        SubsetIndividual::new(Genome::random(
            self.catalog.len(),
            self.subset_size,
            rng,
        ))
    }

    fn evaluate(&self, individual: &SubsetIndividual) -> f64 {
        self.assert_invariant(individual.genome());
        self.evaluator().fitness(individual.genome())
    }

    fn crossover<R: Rng>(
        &self,
        first: &mut SubsetIndividual,
        second: &mut SubsetIndividual,
        rng: &mut R,
    ) {
        self.crossover.apply(
            first.genome_mut().bits_mut(),
            second.genome_mut().bits_mut(),
            rng,
        );
    }

    fn mutate<R: Rng>(&self, individual: &mut SubsetIndividual, rng: &mut R) {
        self.mutation
            .apply(individual.genome_mut().bits_mut(), self.flip_bit_rate, rng);
    }

    fn repair<R: Rng>(&self, individual: &mut SubsetIndividual, rng: &mut R) {
        repair_cardinality(individual.genome_mut().bits_mut(), self.subset_size, rng);
        self.assert_invariant(individual.genome());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;
    use crate::ga::{GaConfig, GaRunner, Individual};
    use crate::random::create_rng;

    fn catalog(n: usize) -> Catalog {
        Catalog::new(
            (0..n)
                .map(|i| Item::new(format!("item{i}"), 10.0 * (i + 1) as f64, vec![i as f64, 1.0]))
                .collect(),
        )
        .unwrap()
    }

    fn problem(n: usize, k: usize) -> SubsetProblem {
        let target = TargetProfile::new(vec![10.0, k as f64], 0.0, 1e4).unwrap();
        SubsetProblem::new(catalog(n), target, k).unwrap()
    }

    #[test]
    fn test_rejects_magnitudes_that_overflow_the_score() {
        let catalog = Catalog::new(vec![
            Item::new("a", 1.0, vec![1e200]),
            Item::new("b", 1.0, vec![1e200]),
        ])
        .unwrap();
        let target = TargetProfile::new(vec![0.0], 0.0, 10.0).unwrap();
        let err = SubsetProblem::new(catalog, target, 2).unwrap_err();
        assert_eq!(err, ConfigError::ScoreOverflow);
    }

    #[test]
    fn test_large_finite_magnitudes_keep_fitness_positive() {
        let catalog = Catalog::new(vec![
            Item::new("a", 1.0, vec![1e150]),
            Item::new("b", 1.0, vec![1e150]),
        ])
        .unwrap();
        let target = TargetProfile::new(vec![0.0], 0.0, 10.0).unwrap();
        let problem = SubsetProblem::new(catalog, target, 2).unwrap();
        let fitness = problem.evaluator().fitness(&Genome::from_indices(2, &[0, 1]));
        assert!(fitness > 0.0 && fitness <= 1.0);
    }

    #[test]
    fn test_rejects_zero_subset_size() {
        let target = TargetProfile::new(vec![0.0, 0.0], 0.0, 1.0).unwrap();
        let err = SubsetProblem::new(catalog(5), target, 0).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidSubsetSize {
                subset_size: 0,
                catalog_len: 5
            }
        );
    }

    #[test]
    fn test_rejects_subset_larger_than_catalog() {
        let target = TargetProfile::new(vec![0.0, 0.0], 0.0, 1.0).unwrap();
        assert!(SubsetProblem::new(catalog(5), target, 6).is_err());
    }

    #[test]
    fn test_accepts_subset_equal_to_catalog() {
        let target = TargetProfile::new(vec![0.0, 0.0], 0.0, 1.0).unwrap();
        assert!(SubsetProblem::new(catalog(5), target, 5).is_ok());
    }

    #[test]
    fn test_rejects_target_dimension_mismatch() {
        let target = TargetProfile::new(vec![0.0], 0.0, 1.0).unwrap();
        let err = SubsetProblem::new(catalog(5), target, 2).unwrap_err();
        assert!(matches!(err, ConfigError::DimensionMismatch { expected: 2, found: 1, .. }));
    }

    #[test]
    fn test_rejects_inverted_budget_built_by_hand() {
        let target = TargetProfile {
            attributes: vec![0.0, 0.0],
            min_budget: 10.0,
            max_budget: 1.0,
        };
        assert!(matches!(
            SubsetProblem::new(catalog(5), target, 2),
            Err(ConfigError::InvertedBudget { .. })
        ));
    }

    #[test]
    fn test_default_flip_rate_is_one_over_n() {
        let p = problem(8, 3);
        assert!((p.flip_bit_rate() - 0.125).abs() < 1e-15);
        assert_eq!(p.crossover_op(), Crossover::OnePoint);
        assert_eq!(p.mutation_op(), Mutation::FlipBit);
        assert_eq!(p.with_flip_bit_rate(3.0).flip_bit_rate(), 1.0);
    }

    #[test]
    fn test_operators_then_repair_keep_invariant() {
        let base = problem(12, 5);
        let mut rng = create_rng(42);
        for cx in Crossover::ALL {
            for mx in Mutation::ALL {
                let p = base.clone().with_operators(cx, mx).with_flip_bit_rate(0.5);
                for _ in 0..50 {
                    let mut a = p.create_individual(&mut rng);
                    let mut b = p.create_individual(&mut rng);
                    p.crossover(&mut a, &mut b, &mut rng);
                    p.repair(&mut a, &mut rng);
                    p.repair(&mut b, &mut rng);
                    p.mutate(&mut a, &mut rng);
                    p.repair(&mut a, &mut rng);
                    p.assert_invariant(a.genome());
                    p.assert_invariant(b.genome());
                }
            }
        }
    }

    #[test]
    fn test_operators_invalidate_fitness() {
        let p = problem(6, 3);
        let mut rng = create_rng(42);
        let mut ind = p.create_individual(&mut rng);
        ind.set_fitness(p.evaluate(&ind));
        p.mutate(&mut ind, &mut rng);
        assert_eq!(ind.fitness(), None);
    }

    #[test]
    #[should_panic(expected = "genome must select exactly 3 items")]
    fn test_evaluate_rejects_wrong_cardinality() {
        let p = problem(6, 3);
        p.evaluate(&SubsetIndividual::new(Genome::from_indices(6, &[0, 1])));
    }

    #[test]
    #[should_panic(expected = "genome length must equal catalog size")]
    fn test_evaluate_rejects_wrong_length() {
        let p = problem(6, 3);
        p.evaluate(&SubsetIndividual::new(Genome::from_indices(5, &[0, 1, 2])));
    }

    #[test]
    fn test_decode() {
        let p = problem(5, 2);
        let summary = p.decode(&Genome::from_indices(5, &[3, 1]));
        assert_eq!(summary.selected_indices, vec![1, 3]);
        assert_eq!(summary.selected_item_names, vec!["item1", "item3"]);
        assert_eq!(summary.total_cost, 60.0);
        assert_eq!(summary.attribute_totals, vec![4.0, 2.0]);
        // target (10, 2): 36 + 0
        assert_eq!(summary.deviation, 36.0);
        assert!(summary.in_budget);
    }

    #[test]
    fn test_every_generation_keeps_invariant() {
        // evaluate() asserts the invariant, so a completed run proves every
        // evaluated genome was repaired
        let p = problem(15, 7)
            .with_operators(Crossover::Uniform, Mutation::FlipBit)
            .with_flip_bit_rate(0.3);
        let config = GaConfig::default()
            .with_population_size(30)
            .with_max_generations(20)
            .with_mutation_rate(1.0)
            .with_seed(3);
        let result = GaRunner::run(&p, &config).unwrap();
        for ind in &result.population {
            p.assert_invariant(ind.genome());
        }
    }
}
