//! Fixed-cardinality subset selection with a genetic algorithm.
//!
//! Given a catalog of N items (each with a cost and a vector of numeric
//! attributes), a target attribute profile, a budget interval and a subset
//! size K, find K items whose attribute totals are as close as possible to
//! the target while their total cost stays within the budget.
//!
//! - [`ga`]: Generic generational GA with tournament selection, bit-vector
//!   operators and a cardinality repair step.
//! - [`subset`]: The subset-selection problem, its fitness function and
//!   labelled operator experiments.
//! - [`oracle`]: Exhaustive enumeration of every K-subset, used as the exact
//!   baseline for small catalogs.
//! - [`catalog`]: Items, catalogs and target profiles, loadable from JSON.
//!
//! # Example
//!
//! ```
//! use u_subset::catalog::{Catalog, Item, TargetProfile};
//! use u_subset::ga::{GaConfig, GaRunner};
//! use u_subset::oracle::ExhaustiveOracle;
//! use u_subset::subset::SubsetProblem;
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("a", 10.0, vec![1.0, 0.0]),
//!     Item::new("b", 20.0, vec![0.0, 2.0]),
//!     Item::new("c", 30.0, vec![3.0, 1.0]),
//!     Item::new("d", 15.0, vec![1.0, 1.0]),
//! ])?;
//! let target = TargetProfile::new(vec![4.0, 3.0], 0.0, 60.0)?;
//! let problem = SubsetProblem::new(catalog, target, 2)?;
//!
//! let config = GaConfig::default().with_population_size(20).with_seed(42);
//! let result = GaRunner::run(&problem, &config)?;
//! let best = problem.decode(result.best().genome());
//!
//! let oracle = ExhaustiveOracle::search(&problem);
//! if best.in_budget {
//!     assert!(best.deviation >= oracle.best_deviation.unwrap());
//! }
//! # Ok::<(), u_subset::Error>(())
//! ```

pub mod catalog;
pub mod error;
pub mod ga;
pub mod oracle;
pub mod random;
pub mod subset;

pub use error::{ConfigError, Error, Result};
