//! Exhaustive enumeration over all K-subsets.

use std::time::Instant;

use tracing::{info, instrument, warn};

use super::combinations::Combinations;
use super::types::OracleResult;
use crate::subset::SubsetProblem;

/// Brute-force optimum finder.
///
/// Visits every `C(N, K)` combination once in lexicographic order, skips
/// those outside the budget, and keeps the first combination reaching the
/// minimum deviation. The result is exact and deterministic, which makes it
/// the reference the GA is measured against.
///
/// # Complexity
/// O(C(N, K) · K · m)
pub struct ExhaustiveOracle;

impl ExhaustiveOracle {
    /// Searches every combination of `problem.subset_size()` items.
    #[instrument(
        skip_all,
        fields(n = problem.catalog().len(), k = problem.subset_size())
    )]
    pub fn search(problem: &SubsetProblem) -> OracleResult {
        let start = Instant::now();
        let catalog = problem.catalog();
        let target = problem.target();
        let evaluator = problem.evaluator();

        let mut best: Option<(Vec<usize>, f64)> = None;
        let mut combinations_checked = 0u64;
        let mut feasible_count = 0u64;

        let mut combos = Combinations::new(catalog.len(), problem.subset_size());
        while let Some(combo) = combos.advance() {
            combinations_checked += 1;

            let (cost, totals) = catalog.aggregate(combo.iter().copied());
            if !target.within_budget(cost) {
                continue;
            }
            feasible_count += 1;

            let dev = evaluator.deviation(&totals);
            // Strict comparison: the first combination seen wins ties
            if best.as_ref().map_or(true, |(_, best_dev)| dev < *best_dev) {
                best = Some((combo.to_vec(), dev));
            }
        }

        let elapsed = start.elapsed();
        let (best_combination, best_deviation) = match best {
            Some((combo, dev)) => (Some(combo), Some(dev)),
            None => {
                warn!(combinations_checked, "no combination satisfies the budget");
                (None, None)
            }
        };

        info!(
            combinations_checked,
            feasible_count,
            best_deviation,
            elapsed_ms = elapsed.as_secs_f64() * 1e3,
            "exhaustive search finished"
        );

        OracleResult {
            best_combination,
            best_deviation,
            combinations_checked,
            feasible_count,
            elapsed,
        }
    }
}
