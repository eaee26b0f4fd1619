//! JSON problem files.
//!
//! ```json
//! {
//!   "catalog": [{"name": "Rice", "cost": 40, "attributes": [130, 2.7, 0.3, 28]}],
//!   "target": {"attributes": [2000, 75, 70, 260], "min_budget": 300, "max_budget": 1200},
//!   "subset_size": 7,
//!   "ga": {"population_size": 200, "max_generations": 80, "seed": 42},
//!   "experiments": [{"label": "baseline", "crossover": "one_point", "mutation": "flip_bit"}]
//! }
//! ```
//!
//! `flip_bit_rate`, `ga` and `experiments` may be omitted.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::experiment::Experiment;
use super::problem::SubsetProblem;
use crate::catalog::{Catalog, Item, TargetProfile};
use crate::error::{ConfigError, Result};
use crate::ga::GaConfig;

/// Everything needed to run a batch of experiments.
///
/// Parsing only checks the JSON shape. Catalog, target, subset size and GA
/// parameters are validated together by [`to_problem`](Self::to_problem),
/// so every semantic problem surfaces as [`Error::Config`](crate::Error::Config).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemFile {
    /// Catalog items, in index order.
    pub catalog: Vec<Item>,
    pub target: TargetProfile,
    pub subset_size: usize,

    /// Per-bit flip probability; `1 / N` when absent.
    #[serde(default)]
    pub flip_bit_rate: Option<f64>,

    #[serde(default)]
    pub ga: GaConfig,

    #[serde(default = "Experiment::default_suite")]
    pub experiments: Vec<Experiment>,
}

impl ProblemFile {
    /// Parses a problem file from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: ProblemFile = serde_json::from_str(json)?;
        debug!(
            items = file.catalog.len(),
            subset_size = file.subset_size,
            experiments = file.experiments.len(),
            "parsed problem file"
        );
        Ok(file)
    }

    /// Reads and parses a problem file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Validates the file and builds the problem it describes.
    ///
    /// The GA configuration is validated here too, so a file that loads is
    /// ready to run.
    pub fn to_problem(&self) -> Result<SubsetProblem> {
        self.ga.validate()?;

        let catalog = Catalog::new(self.catalog.clone())?;
        let mut problem = SubsetProblem::new(catalog, self.target.clone(), self.subset_size)?;
        if let Some(rate) = self.flip_bit_rate {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::InvalidParameter(format!(
                    "flip_bit_rate must be in [0, 1], got {rate}"
                ))
                .into());
            }
            problem = problem.with_flip_bit_rate(rate);
        }
        Ok(problem)
    }
}
