//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TYPOLOGY` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use cognitive_typology::config::AppConfig;
//!
//! let config = AppConfig::load_validated().expect("Invalid configuration");
//! let calculator = config.calculation.build_calculator().expect("Invalid configuration");
//! ```

mod calculation;
mod error;
mod logging;

pub use calculation::{CalculationConfig, MAX_DICHOTOMY_BONUS, MAX_SECONDARY_FACTOR};
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads successfully.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Strategy preset and tuning overrides
    #[serde(default)]
    pub calculation: CalculationConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TYPOLOGY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TYPOLOGY__CALCULATION__PRESET=flexible` -> `calculation.preset = flexible`
    /// - `TYPOLOGY__CALCULATION__MATCH_POSITION_WEIGHTS=40,30,20,10` -> list
    /// - `TYPOLOGY__LOGGING__JSON=true` -> `logging.json = true`
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
                    .prefix("TYPOLOGY")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("calculation.stack_position_weights")
                    .with_list_parse_key("calculation.match_position_weights"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.calculation.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Load configuration and reject it unless every value is valid
    ///
    /// # Errors
    ///
    /// - `LoadError` if values cannot be parsed
    /// - `ValidationFailed` if a parsed value is out of range
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }
}
