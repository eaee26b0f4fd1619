//! Target attribute profile and budget interval.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Attribute totals to approach and the admissible total-cost interval.
///
/// # Examples
///
/// ```
/// use u_subset::catalog::TargetProfile;
///
/// let target = TargetProfile::new(vec![2000.0, 75.0, 70.0, 260.0], 300.0, 1200.0).unwrap();
/// assert!(target.within_budget(750.0));
/// assert!(!target.within_budget(1250.0));
/// assert_eq!(target.budget_midpoint(), 750.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetProfile {
    /// Desired attribute totals, one per catalog dimension.
    pub attributes: Vec<f64>,
    /// Lowest admissible total cost (inclusive).
    pub min_budget: f64,
    /// Highest admissible total cost (inclusive).
    pub max_budget: f64,
}

impl TargetProfile {
    /// Creates a validated profile.
    pub fn new(
        attributes: Vec<f64>,
        min_budget: f64,
        max_budget: f64,
    ) -> Result<Self, ConfigError> {
        let profile = Self {
            attributes,
            min_budget,
            max_budget,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Checks budget ordering and finiteness.
    ///
    /// Deserialized profiles bypass [`new`](Self::new), so problem
    /// construction calls this again.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_budget.is_finite() {
            return Err(ConfigError::NonFinite("min_budget".into()));
        }
        if !self.max_budget.is_finite() {
            return Err(ConfigError::NonFinite("max_budget".into()));
        }
        if self.attributes.iter().any(|a| !a.is_finite()) {
            return Err(ConfigError::NonFinite("target attributes".into()));
        }
        if self.min_budget > self.max_budget {
            return Err(ConfigError::InvertedBudget {
                min: self.min_budget,
                max: self.max_budget,
            });
        }
        Ok(())
    }

    /// Number of target attributes.
    pub fn dimension(&self) -> usize {
        self.attributes.len()
    }

    /// Whether `cost` lies in `[min_budget, max_budget]`.
    pub fn within_budget(&self, cost: f64) -> bool {
        cost >= self.min_budget && cost <= self.max_budget
    }

    /// Centre of the budget interval.
    pub fn budget_midpoint(&self) -> f64 {
        (self.min_budget + self.max_budget) / 2.0
    }
}
