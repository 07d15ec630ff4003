//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{name} must be a finite, non-negative number (got {value})")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("{name} may not exceed {max} (got {value})")]
    BonusTooLarge { name: &'static str, value: f64, max: f64 },

    #[error("mismatch_discount must be in (0, 1] (got {0})")]
    InvalidDiscount(f64),

    #[error("{name} needs exactly {expected} values (got {actual})")]
    PositionWeightCount {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{0} must be strictly decreasing")]
    PositionWeightsNotDecreasing(&'static str),

    #[error("Logging filter must not be empty")]
    EmptyLogFilter,
}
