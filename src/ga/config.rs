//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tolerance below a perfect fitness of `1.0` that still counts as an exact
/// match for the default early-stop rule.
pub const PERFECT_FITNESS_EPSILON: f64 = 1e-12;

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, tournament size, operator rates and
/// termination conditions. Every field has a default, so a partial JSON
/// object deserializes into a complete configuration.
///
/// # Defaults
///
/// ```
/// use u_subset::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 200);
/// assert_eq!(config.max_generations, 80);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_subset::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_tournament_size(5)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of individuals in the population (P).
    ///
    /// The whole population is replaced every generation.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Number of contestants drawn (without replacement) per tournament.
    ///
    /// - 2: light pressure (good for diversity)
    /// - 3-5: moderate pressure (typical default)
    /// - >5: strong pressure (risk of premature convergence)
    pub tournament_size: usize,

    /// Probability of applying crossover to an adjacent pair of offspring (0.0–1.0).
    pub crossover_rate: f64,

    /// Probability of applying mutation to an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Stop as soon as the best fitness of a generation reaches this value.
    ///
    /// `None` always runs `max_generations` generations.
    pub fitness_target: Option<f64>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            max_generations: 80,
            tournament_size: 3,
            crossover_rate: 0.9,
            mutation_rate: 0.2,
            fitness_target: Some(1.0 - PERFECT_FITNESS_EPSILON),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the early-stop fitness target (`None` to disable).
    pub fn with_fitness_target(mut self, target: Option<f64>) -> Self {
        self.fitness_target = target;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Builder methods clamp rates, but deserialized configurations are
    /// taken as-is, so ranges are checked here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::InvalidParameter(
                "population_size must be at least 2".into(),
            ));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::InvalidParameter(
                "max_generations must be at least 1".into(),
            ));
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(ConfigError::InvalidParameter(format!(
                "tournament_size must be in 1..={}, got {}",
                self.population_size, self.tournament_size
            )));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(ConfigError::InvalidParameter(format!(
                "crossover_rate must be in [0, 1], got {}",
                self.crossover_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidParameter(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if matches!(self.fitness_target, Some(t) if t.is_nan()) {
            return Err(ConfigError::NonFinite("fitness_target".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 80);
        assert_eq!(config.tournament_size, 3);
        assert!((config.crossover_rate - 0.9).abs() < 1e-10);
        assert!((config.mutation_rate - 0.2).abs() < 1e-10);
        assert_eq!(config.fitness_target, Some(1.0 - 1e-12));
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(50)
            .with_max_generations(1000)
            .with_tournament_size(4)
            .with_crossover_rate(0.8)
            .with_mutation_rate(0.05)
            .with_fitness_target(None)
            .with_seed(42);

        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.tournament_size, 4);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.fitness_target, None);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_tournament_bounds() {
        assert!(GaConfig::default().with_tournament_size(0).validate().is_err());
        let config = GaConfig::default()
            .with_population_size(4)
            .with_tournament_size(5);
        assert!(config.validate().is_err());
        let config = GaConfig::default()
            .with_population_size(4)
            .with_tournament_size(4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_crossover_rate(-0.5)
            .with_mutation_rate(2.0);

        assert!((config.crossover_rate - 0.0).abs() < 1e-10);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_out_of_range_rate_from_json() {
        let config: GaConfig = serde_json::from_str(r#"{"mutation_rate": 1.5}"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GaConfig =
            serde_json::from_str(r#"{"population_size": 60, "seed": 7}"#).unwrap();
        assert_eq!(config.population_size, 60);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_generations, 80);
    }
}
