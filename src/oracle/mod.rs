//! Exhaustive oracle.
//!
//! Enumerates every K-subset of the catalog to find the exact
//! minimum-deviation selection within budget. Used as ground truth for
//! judging GA solution quality on catalogs small enough to enumerate.

mod combinations;
mod runner;
mod types;

pub use combinations::{binomial, Combinations};
pub use runner::ExhaustiveOracle;
pub use types::OracleResult;
