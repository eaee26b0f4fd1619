//! Error types.
//!
//! Configuration problems are reported as [`ConfigError`] before any search
//! starts. Broken invariants inside a run (stale fitness, wrong cardinality)
//! are defects and panic instead.

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for loading and validating a problem.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("malformed problem file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read problem file: {0}")]
    Io(#[from] std::io::Error),
}

/// A single configuration-validation failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("catalog is empty")]
    EmptyCatalog,

    #[error("subset size must be in 1..={catalog_len}, got {subset_size}")]
    InvalidSubsetSize {
        subset_size: usize,
        catalog_len: usize,
    },

    #[error("min budget {min} exceeds max budget {max}")]
    InvertedBudget { min: f64, max: f64 },

    #[error("{context} has {found} attributes, expected {expected}")]
    DimensionMismatch {
        context: String,
        expected: usize,
        found: usize,
    },

    #[error("{0} must be a finite number")]
    NonFinite(String),

    #[error("{0}")]
    InvalidParameter(String),

    #[error("attribute or cost magnitudes are too large: worst-case score overflows f64")]
    ScoreOverflow,
}
