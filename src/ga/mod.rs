//! Genetic Algorithm framework.
//!
//! A generic, domain-agnostic GA framework built on trait-based abstractions.
//! Users define their problem by implementing [`GaProblem`], which specifies
//! how to create, evaluate, recombine, mutate and repair individuals.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with a lazily computed fitness
//! - [`GaProblem`]: Problem definition: initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, stopping rule)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final population and per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: Bit-vector crossover and mutation operators
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
pub mod operators;
mod repair;
mod runner;
mod selection;
mod types;

pub use config::{GaConfig, PERFECT_FITNESS_EPSILON};
pub use operators::{
    flip_bit_mutation, one_point_crossover, scramble_mutation, swap_mutation,
    two_point_crossover, uniform_crossover, Crossover, Mutation,
};
pub use repair::repair_cardinality;
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::{tournament, tournament_select};
pub use types::{Fitness, GaProblem, Individual};
