//! Oracle result type.

use std::time::Duration;

use serde::Serialize;

/// Outcome of an exhaustive search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OracleResult {
    /// Minimum-deviation in-budget combination (ascending indices), or
    /// `None` if no combination satisfies the budget.
    pub best_combination: Option<Vec<usize>>,

    /// Deviation of `best_combination`.
    pub best_deviation: Option<f64>,

    /// Every combination examined, feasible or not. Always `C(N, K)`.
    pub combinations_checked: u64,

    /// Combinations whose cost lies within the budget.
    pub feasible_count: u64,

    /// Wall-clock time of the enumeration.
    pub elapsed: Duration,
}

impl OracleResult {
    /// Whether at least one combination satisfies the budget.
    pub fn is_feasible(&self) -> bool {
        self.best_combination.is_some()
    }
}
