//! Deviation, budget penalty and fitness scoring.
//!
//! ```text
//! deviation = Σ_j (totals[j] - target[j])²
//! penalty   = 0                                         if cost in [min, max]
//!           = BASE + SCALE · |cost - (min + max) / 2|   otherwise
//! fitness   = 1 / (1 + deviation + penalty)
//! ```
//!
//! Fitness lies in (0, 1] and is exactly 1 only for an in-budget selection
//! that hits every target total. Any out-of-budget selection scores below
//! `1 / (1 + BASE)`, beneath every in-budget selection with deviation
//! under `BASE`.

use serde::Serialize;

use super::genome::Genome;
use crate::catalog::{Catalog, TargetProfile};

/// Fixed part of the out-of-budget penalty.
pub const BUDGET_PENALTY_BASE: f64 = 1e6;

/// Per-unit penalty for distance from the budget midpoint.
pub const BUDGET_PENALTY_SCALE: f64 = 1e3;

/// Unweighted sum of squared differences between totals and targets.
///
/// # Panics
/// Panics if the slices differ in length.
pub fn deviation(totals: &[f64], target: &[f64]) -> f64 {
    assert_eq!(
        totals.len(),
        target.len(),
        "attribute totals and target must have the same dimension"
    );
    totals
        .iter()
        .zip(target)
        .map(|(t, g)| (t - g) * (t - g))
        .sum()
}

/// Maps a non-negative deviation onto (0, 1].
pub fn fitness_from_deviation(deviation: f64) -> f64 {
    1.0 / (1.0 + deviation)
}

/// Upper bound on `deviation + penalty` over every possible selection.
///
/// Fitness stays strictly positive exactly when this bound is finite.
/// Assumes `target` has the catalog's dimension.
pub fn worst_case_score(catalog: &Catalog, target: &TargetProfile) -> f64 {
    let deviation: f64 = target
        .attributes
        .iter()
        .enumerate()
        .map(|(j, goal)| {
            let spread: f64 = catalog
                .items()
                .iter()
                .map(|item| item.attributes[j].abs())
                .sum::<f64>()
                + goal.abs();
            spread * spread
        })
        .sum();
    let cost_spread: f64 = catalog.items().iter().map(|item| item.cost.abs()).sum::<f64>()
        + target.budget_midpoint().abs();
    deviation + BUDGET_PENALTY_BASE + BUDGET_PENALTY_SCALE * cost_spread
}

/// Every intermediate of a fitness evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub total_cost: f64,
    pub attribute_totals: Vec<f64>,
    /// Deviation from the target totals, without penalty.
    pub deviation: f64,
    /// Budget penalty; `0.0` when in budget.
    pub penalty: f64,
    pub fitness: f64,
    pub in_budget: bool,
}

/// Scores selections against a catalog and a target profile.
///
/// Pure: the result depends only on the genome contents.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    catalog: &'a Catalog,
    target: &'a TargetProfile,
}

impl<'a> FitnessEvaluator<'a> {
    /// Evaluator over `catalog` scored against `target`.
    pub fn new(catalog: &'a Catalog, target: &'a TargetProfile) -> Self {
        Self { catalog, target }
    }

    /// Total cost and per-attribute totals of the selected items.
    pub fn aggregate(&self, genome: &Genome) -> (f64, Vec<f64>) {
        self.catalog.aggregate(genome.selected())
    }

    /// Deviation of `totals` from the target attributes.
    pub fn deviation(&self, totals: &[f64]) -> f64 {
        deviation(totals, &self.target.attributes)
    }

    /// Budget penalty for a total cost.
    pub fn penalty(&self, cost: f64) -> f64 {
        if self.target.within_budget(cost) {
            0.0
        } else {
            BUDGET_PENALTY_BASE
                + BUDGET_PENALTY_SCALE * (cost - self.target.budget_midpoint()).abs()
        }
    }

    /// Full evaluation of a genome.
    pub fn evaluate(&self, genome: &Genome) -> Evaluation {
        let (total_cost, attribute_totals) = self.aggregate(genome);
        let deviation = self.deviation(&attribute_totals);
        let penalty = self.penalty(total_cost);
        Evaluation {
            total_cost,
            fitness: fitness_from_deviation(deviation + penalty),
            in_budget: penalty == 0.0,
            attribute_totals,
            deviation,
            penalty,
        }
    }

    /// Fitness of a genome.
    pub fn fitness(&self, genome: &Genome) -> f64 {
        self.evaluate(genome).fitness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Item::new("a", 100.0, vec![10.0, 1.0]),
            Item::new("b", 100.0, vec![5.0, 2.0]),
            // Same attributes as "b" at a much higher cost
            Item::new("c", 900.0, vec![5.0, 2.0]),
            Item::new("d", 50.0, vec![0.0, 0.0]),
        ])
        .unwrap()
    }

    fn target() -> TargetProfile {
        TargetProfile::new(vec![15.0, 3.0], 100.0, 500.0).unwrap()
    }

    #[test]
    fn test_deviation_sum_of_squares() {
        assert_eq!(deviation(&[1.0, 2.0, 3.0], &[1.0, 4.0, 0.0]), 13.0);
        assert_eq!(deviation(&[], &[]), 0.0);
    }

    #[test]
    #[should_panic(expected = "same dimension")]
    fn test_deviation_dimension_mismatch_panics() {
        deviation(&[1.0], &[1.0, 2.0]);
    }

    #[test]
    fn test_worst_case_score_bounds_every_selection() {
        let (c, t) = (catalog(), target());
        let evaluator = FitnessEvaluator::new(&c, &t);
        let bound = worst_case_score(&c, &t);
        for k in 0..=4 {
            for combo in crate::oracle::Combinations::new(4, k) {
                let eval = evaluator.evaluate(&Genome::from_indices(4, &combo));
                assert!(eval.deviation + eval.penalty <= bound, "{combo:?}");
                assert!(eval.fitness >= fitness_from_deviation(bound));
            }
        }
    }

    #[test]
    fn test_perfect_in_budget_match_scores_one() {
        let (c, t) = (catalog(), target());
        let eval = FitnessEvaluator::new(&c, &t).evaluate(&Genome::from_indices(4, &[0, 1]));
        assert_eq!(eval.total_cost, 200.0);
        assert_eq!(eval.attribute_totals, vec![15.0, 3.0]);
        assert_eq!(eval.deviation, 0.0);
        assert_eq!(eval.penalty, 0.0);
        assert!(eval.in_budget);
        assert_eq!(eval.fitness, 1.0);
    }

    #[test]
    fn test_imperfect_match_below_one() {
        let (c, t) = (catalog(), target());
        let eval = FitnessEvaluator::new(&c, &t).evaluate(&Genome::from_indices(4, &[0, 3]));
        // totals (10, 1): (10-15)² + (1-3)² = 29
        assert_eq!(eval.deviation, 29.0);
        assert!((eval.fitness - 1.0 / 30.0).abs() < 1e-15);
        assert!(eval.fitness > 0.0 && eval.fitness < 1.0);
    }

    #[test]
    fn test_penalty_strictness() {
        let (c, t) = (catalog(), target());
        let evaluator = FitnessEvaluator::new(&c, &t);
        let cheap = evaluator.evaluate(&Genome::from_indices(4, &[0, 1]));
        let pricey = evaluator.evaluate(&Genome::from_indices(4, &[0, 2]));

        assert_eq!(cheap.attribute_totals, pricey.attribute_totals);
        assert!(cheap.in_budget);
        assert!(!pricey.in_budget);
        assert!(cheap.fitness > pricey.fitness);
    }

    #[test]
    fn test_penalty_formula() {
        let (c, t) = (catalog(), target());
        let evaluator = FitnessEvaluator::new(&c, &t);
        // midpoint 300; cost 1000 -> 1e6 + 1e3 * 700
        assert_eq!(evaluator.penalty(1000.0), 1e6 + 7e5);
        // below budget: cost 50 -> 1e6 + 1e3 * 250
        assert_eq!(evaluator.penalty(50.0), 1e6 + 2.5e5);
        assert_eq!(evaluator.penalty(100.0), 0.0);
        assert_eq!(evaluator.penalty(500.0), 0.0);
    }

    #[test]
    fn test_out_of_budget_perfect_attributes_still_tiny() {
        let c = catalog();
        // Totals of {a, c} hit the target exactly but cost 1000 > 500
        let t = TargetProfile::new(vec![15.0, 3.0], 100.0, 950.0).unwrap();
        let eval = FitnessEvaluator::new(&c, &t).evaluate(&Genome::from_indices(4, &[0, 2]));
        assert_eq!(eval.deviation, 0.0);
        // 50 units above max budget
        assert_eq!(eval.total_cost - t.max_budget, 50.0);
        assert!(eval.fitness < 1e-6, "fitness {}", eval.fitness);
    }

    #[test]
    fn test_fitness_matches_evaluate() {
        let (c, t) = (catalog(), target());
        let evaluator = FitnessEvaluator::new(&c, &t);
        let g = Genome::from_indices(4, &[1, 3]);
        assert_eq!(evaluator.fitness(&g), evaluator.evaluate(&g).fitness);
    }
}
