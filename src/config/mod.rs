//! Engine configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `SAW_ENGINE` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use saw_engine::config::EngineConfig;
//!
//! let config = EngineConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let criteria = config.scoring.criterion_set();
//! ```

mod error;
mod scoring;

pub use error::{ConfigError, ValidationError};
pub use scoring::ScoringConfig;

use serde::Deserialize;

/// Root engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Criterion weights for the scoring pass
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Rust log filter directive
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `SAW_ENGINE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SAW_ENGINE__SCORING__PRICE_WEIGHT=0.5` -> `scoring.price_weight = 0.5`
    /// - `SAW_ENGINE__LOG_FILTER=debug` -> `log_filter = "debug"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SAW_ENGINE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.log_filter.trim().is_empty() {
            return Err(ValidationError::InvalidLogFilter);
        }
        self.scoring.validate()?;
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info,saw_engine=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EngineConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.scoring.price_weight, 0.40);
        assert_eq!(config.log_filter, "info,saw_engine=debug");
    }

    #[test]
    fn empty_log_filter_fails_validation() {
        let config = EngineConfig {
            scoring: ScoringConfig::default(),
            log_filter: "  ".to_string(),
        };

        assert_eq!(config.validate(), Err(ValidationError::InvalidLogFilter));
    }

    #[test]
    fn criterion_set_from_config_scores_like_defaults() {
        let config = EngineConfig::default();

        let set = config.scoring.criterion_set();
        assert_eq!(set.len(), 3);
        assert!(set.has_valid_weight_sum());
    }
}
