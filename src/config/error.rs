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
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Criterion weight '{name}' must be between 0 and 1 exclusive, got {weight}")]
    InvalidWeight { name: &'static str, weight: f64 },

    #[error("Criterion weights must sum to 1.0 within tolerance, got {sum}")]
    WeightSumMismatch { sum: f64 },

    #[error("Invalid log filter directive")]
    InvalidLogFilter,
}
