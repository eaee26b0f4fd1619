//! Fixed-cardinality subset selection.
//!
//! Choose exactly K of N catalog items so that their summed attributes come
//! as close as possible to a target profile while the summed cost stays
//! within a budget.
//!
//! # Encoding
//!
//! A [`Genome`] is a bit vector of length N with exactly K ones. Crossover
//! and flip-bit mutation may break the cardinality; [`SubsetProblem`]
//! repairs every offspring back to K ones before it is evaluated.
//!
//! # Fitness
//!
//! `fitness = 1 / (1 + deviation + penalty)` where `deviation` is the sum of
//! squared differences to the target and `penalty` is non-zero only when
//! the cost falls outside the budget. See [`FitnessEvaluator`].
//!
//! # Experiments
//!
//! [`run_experiments`] runs the GA once per [`Experiment`] (a labelled
//! crossover/mutation pairing). A [`ProblemFile`] bundles catalog, target,
//! GA configuration and experiments into one JSON document.

mod experiment;
mod file;
mod fitness;
mod genome;
mod problem;

pub use experiment::{run_experiments, Experiment, ExperimentOutcome};
pub use file::ProblemFile;
pub use fitness::{
    deviation, fitness_from_deviation, worst_case_score, Evaluation, FitnessEvaluator,
    BUDGET_PENALTY_BASE, BUDGET_PENALTY_SCALE,
};
pub use genome::{Genome, SubsetIndividual};
pub use problem::{SolutionSummary, SubsetProblem};
