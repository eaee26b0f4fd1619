//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → repair →
//! mutation → repair → evaluation → replacement → repeat.
//!
//! Replacement is fully generational: every generation the population is
//! replaced by its offspring and nothing is carried over, so the best
//! fitness is not guaranteed to be monotone.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, instrument};

use super::config::GaConfig;
use super::selection::tournament_select;
use super::types::{Fitness, GaProblem, Individual};
use crate::error::ConfigError;
use crate::random::create_rng;

/// Fitness summary of one completed generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationStats {
    /// 1-based generation index.
    pub generation: usize,
    /// Highest fitness in the population.
    pub max_fitness: f64,
    /// Mean fitness of the population.
    pub mean_fitness: f64,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The population after the last completed generation, all evaluated.
    pub population: Vec<I>,

    /// One entry per completed generation, in order.
    pub history: Vec<GenerationStats>,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run stopped because the fitness target was reached.
    pub early_stopped: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

impl<I: Individual> GaResult<I> {
    /// The fittest individual of the final population.
    ///
    /// Ties go to the lowest index.
    pub fn best(&self) -> &I {
        find_best(&self.population)
    }

    /// Fitness of [`best`](Self::best).
    pub fn best_fitness(&self) -> I::Fitness {
        self.best().evaluated_fitness()
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.best_fitness());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// Fails before any work is done if the configuration is invalid.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA will
    /// stop before starting the next generation and return the last
    /// completed population.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            population_size = config.population_size,
            max_generations = config.max_generations,
            seed = ?config.seed,
        )
    )]
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        // 1. Initialize population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();

        // 2. Evaluate initial population
        evaluate_population(problem, &mut population);

        let mut history = Vec::with_capacity(config.max_generations);
        let mut early_stopped = false;
        let mut cancelled = false;

        // 3. Evolutionary loop
        for gen in 1..=config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let offspring = breed(problem, &population, config, &mut rng);

            // Generational replacement
            population = offspring;

            let stats = generation_stats(gen, &population);
            debug!(
                generation = gen,
                max_fitness = stats.max_fitness,
                mean_fitness = stats.mean_fitness,
                "generation complete"
            );
            history.push(stats);

            problem.on_generation(&stats);

            if matches!(config.fitness_target, Some(target) if stats.max_fitness >= target) {
                early_stopped = true;
                break;
            }
        }

        let generations = history.len();
        info!(
            generations,
            early_stopped,
            cancelled,
            best_fitness = history.last().map(|s| s.max_fitness),
            "GA run finished"
        );

        Ok(GaResult {
            population,
            history,
            generations,
            early_stopped,
            cancelled,
        })
    }
}

/// Produces the next generation from the current one.
///
/// Draw order: all tournaments, then one crossover decision per adjacent
/// pair, then one mutation decision per child, each followed by the
/// operator's own draws and any repair draws.
fn breed<P: GaProblem, R: Rng>(
    problem: &P,
    population: &[P::Individual],
    config: &GaConfig,
    rng: &mut R,
) -> Vec<P::Individual> {
    // Selection; clones never alias the parent population
    let winners = tournament_select(
        population,
        config.population_size,
        config.tournament_size,
        rng,
    );
    let mut offspring: Vec<P::Individual> =
        winners.into_iter().map(|i| population[i].clone()).collect();

    // Crossover on adjacent pairs; an odd last child is left alone
    for pair in offspring.chunks_exact_mut(2) {
        if rng.random_bool(config.crossover_rate) {
            let (first, second) = pair.split_at_mut(1);
            problem.crossover(&mut first[0], &mut second[0], rng);
            problem.repair(&mut first[0], rng);
            problem.repair(&mut second[0], rng);
        }
    }

    // Mutation
    for child in offspring.iter_mut() {
        if rng.random_bool(config.mutation_rate) {
            problem.mutate(child, rng);
            problem.repair(child, rng);
        }
    }

    evaluate_population(problem, &mut offspring);
    offspring
}

/// Evaluates every individual whose fitness cache is empty.
///
/// Untouched clones keep the fitness they were selected with; evaluation
/// is a pure function of the genome, so this equals re-evaluating them.
fn evaluate_population<P: GaProblem>(problem: &P, population: &mut [P::Individual]) {
    for ind in population.iter_mut() {
        if ind.fitness().is_none() {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        }
    }
}

fn generation_stats<I: Individual>(generation: usize, population: &[I]) -> GenerationStats {
    let fitnesses: Vec<f64> = population
        .iter()
        .map(|ind| ind.evaluated_fitness().to_f64())
        .collect();
    let max_fitness = fitnesses.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean_fitness = fitnesses.iter().sum::<f64>() / fitnesses.len() as f64;
    GenerationStats {
        generation,
        max_fitness,
        mean_fitness,
    }
}

/// Find the individual with the best (highest) fitness; lowest index wins ties.
fn find_best<I: Individual>(population: &[I]) -> &I {
    let mut best = population.first().expect("population must not be empty");
    for ind in &population[1..] {
        if ind.evaluated_fitness() > best.evaluated_fitness() {
            best = ind;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
