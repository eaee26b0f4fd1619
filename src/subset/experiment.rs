//! Labelled operator experiments.
//!
//! An [`Experiment`] names one `(crossover, mutation)` pairing. Running a
//! list of them against the same problem and configuration yields one
//! [`ExperimentOutcome`] per label, ready to be charted or compared with
//! the exhaustive oracle.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::genome::SubsetIndividual;
use super::problem::{SolutionSummary, SubsetProblem};
use crate::error::ConfigError;
use crate::ga::{Crossover, GaConfig, GaResult, GaRunner, GenerationStats, Mutation};
use crate::oracle::OracleResult;

/// One labelled operator pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experiment {
    pub label: String,
    pub crossover: Crossover,
    pub mutation: Mutation,
}

impl Experiment {
    /// Experiment with an explicit label.
    pub fn new(label: impl Into<String>, crossover: Crossover, mutation: Mutation) -> Self {
        Self {
            label: label.into(),
            crossover,
            mutation,
        }
    }

    /// Experiment labelled `"<crossover> + <mutation>"`.
    pub fn from_operators(crossover: Crossover, mutation: Mutation) -> Self {
        Self::new(format!("{crossover} + {mutation}"), crossover, mutation)
    }

    /// The six standard pairings: one-point with flip-bit and swap,
    /// two-point with flip-bit and scramble, uniform with swap and scramble.
    pub fn default_suite() -> Vec<Experiment> {
        use Crossover::*;
        use Mutation::*;
        [
            (OnePoint, FlipBit),
            (OnePoint, Swap),
            (TwoPoint, FlipBit),
            (TwoPoint, Scramble),
            (Uniform, Swap),
            (Uniform, Scramble),
        ]
        .into_iter()
        .map(|(c, m)| Experiment::from_operators(c, m))
        .collect()
    }

    /// Every crossover × mutation pairing.
    pub fn full_grid() -> Vec<Experiment> {
        Crossover::ALL
            .into_iter()
            .flat_map(|c| Mutation::ALL.into_iter().map(move |m| Experiment::from_operators(c, m)))
            .collect()
    }
}

/// Result of one experiment.
#[derive(Debug, Clone)]
pub struct ExperimentOutcome {
    pub experiment: Experiment,
    pub result: GaResult<SubsetIndividual>,
    /// Best individual of the final population, decoded.
    pub best: SolutionSummary,
}

impl ExperimentOutcome {
    /// Label of the experiment that produced this outcome.
    pub fn label(&self) -> &str {
        &self.experiment.label
    }

    /// Per-generation max/mean fitness, for charting.
    pub fn history(&self) -> &[GenerationStats] {
        &self.result.history
    }

    /// How far the GA's best deviation lies above the oracle optimum.
    ///
    /// `None` when the oracle found no feasible combination or the GA's
    /// best is out of budget.
    pub fn gap_to(&self, oracle: &OracleResult) -> Option<f64> {
        if !self.best.in_budget {
            return None;
        }
        oracle
            .best_deviation
            .map(|optimum| self.best.deviation - optimum)
    }
}

/// Runs every experiment once with the same configuration and seed.
///
/// The configuration is validated up front, so an invalid one fails before
/// any experiment starts.
#[instrument(skip_all, fields(experiments = experiments.len()))]
pub fn run_experiments(
    problem: &SubsetProblem,
    config: &GaConfig,
    experiments: &[Experiment],
) -> Result<Vec<ExperimentOutcome>, ConfigError> {
    config.validate()?;

    experiments
        .iter()
        .map(|experiment| {
            let variant = problem
                .clone()
                .with_operators(experiment.crossover, experiment.mutation);
            let result = GaRunner::run(&variant, config)?;
            let best = variant.decode(result.best().genome());

            info!(
                label = %experiment.label,
                generations = result.generations,
                fitness = best.fitness,
                deviation = best.deviation,
                "experiment finished"
            );

            Ok(ExperimentOutcome {
                experiment: experiment.clone(),
                result,
                best,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Item, TargetProfile};
    use crate::oracle::ExhaustiveOracle;
    use std::collections::HashSet;
    use std::time::Duration;

    fn problem() -> SubsetProblem {
        let items = (0..10)
            .map(|i| Item::new(format!("i{i}"), 10.0 + i as f64, vec![i as f64, (10 - i) as f64]))
            .collect();
        let target = TargetProfile::new(vec![12.0, 18.0], 0.0, 100.0).unwrap();
        SubsetProblem::new(Catalog::new(items).unwrap(), target, 3).unwrap()
    }

    fn config() -> GaConfig {
        GaConfig::default()
            .with_population_size(30)
            .with_max_generations(15)
            .with_seed(11)
    }

    #[test]
    fn test_default_suite() {
        let suite = Experiment::default_suite();
        assert_eq!(suite.len(), 6);
        assert_eq!(suite[0].label, "one_point + flip_bit");
        assert_eq!(suite[3].crossover, Crossover::TwoPoint);
        assert_eq!(suite[3].mutation, Mutation::Scramble);
        let labels: HashSet<_> = suite.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels.len(), 6);
    }

    #[test]
    fn test_full_grid_covers_every_pair() {
        let grid = Experiment::full_grid();
        assert_eq!(grid.len(), 9);
        let pairs: HashSet<_> = grid.iter().map(|e| (e.crossover, e.mutation)).collect();
        assert_eq!(pairs.len(), 9);
    }

    #[test]
    fn test_experiment_from_json() {
        let e: Experiment = serde_json::from_str(
            r#"{"label": "u+s", "crossover": "uniform", "mutation": "swap"}"#,
        )
        .unwrap();
        assert_eq!(e, Experiment::new("u+s", Crossover::Uniform, Mutation::Swap));
    }

    #[test]
    fn test_run_experiments_one_outcome_per_label() {
        let suite = Experiment::default_suite();
        let outcomes = run_experiments(&problem(), &config(), &suite).unwrap();

        assert_eq!(outcomes.len(), suite.len());
        for (outcome, experiment) in outcomes.iter().zip(&suite) {
            assert_eq!(outcome.label(), experiment.label);
            assert_eq!(outcome.history().len(), outcome.result.generations);
            assert_eq!(outcome.best.selected_indices.len(), 3);
        }
    }

    #[test]
    fn test_run_experiments_is_reproducible() {
        let suite = Experiment::default_suite();
        let a = run_experiments(&problem(), &config(), &suite).unwrap();
        let b = run_experiments(&problem(), &config(), &suite).unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.history(), y.history());
            assert_eq!(x.best, y.best);
        }
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let cfg = config().with_max_generations(0);
        assert!(run_experiments(&problem(), &cfg, &Experiment::default_suite()).is_err());
    }

    #[test]
    fn test_gap_is_non_negative() {
        let p = problem();
        let oracle = ExhaustiveOracle::search(&p);
        let outcomes = run_experiments(&p, &config(), &Experiment::default_suite()).unwrap();
        for outcome in &outcomes {
            let gap = outcome.gap_to(&oracle).expect("budget admits everything");
            assert!(gap >= -1e-9, "{}: gap {gap}", outcome.label());
        }
    }

    #[test]
    fn test_gap_none_when_oracle_infeasible() {
        let p = problem();
        let outcomes = run_experiments(&p, &config(), &Experiment::default_suite()[..1]).unwrap();
        let infeasible = OracleResult {
            best_combination: None,
            best_deviation: None,
            combinations_checked: 120,
            feasible_count: 0,
            elapsed: Duration::ZERO,
        };
        assert_eq!(outcomes[0].gap_to(&infeasible), None);
    }
}
