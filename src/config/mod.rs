//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `BCR_FORM` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment is a valid one.
//!
//! # Example
//!
//! ```no_run
//! use bcr_form::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod error;
mod rate_limit;
mod server;
mod simulation;
mod wizard;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use rate_limit::RateLimitSettings;
pub use server::{Environment, ServerConfig};
pub use simulation::SimulationConfig;
pub use wizard::WizardConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, static files)
    #[serde(default)]
    pub server: ServerConfig,

    /// Optional text-generation provider used by the security scorer
    #[serde(default)]
    pub ai: AiConfig,

    /// Request rate limits
    #[serde(default)]
    pub rate_limit: RateLimitSettings,

    /// Chat wizard behaviour
    #[serde(default)]
    pub wizard: WizardConfig,

    /// Simulated backend latency
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BCR_FORM` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BCR_FORM__SERVER__PORT=8001` -> `server.port = 8001`
    /// - `BCR_FORM__WIZARD__STRICT_NAMES=true` -> `wizard.strict_names = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BCR_FORM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
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
        self.server.validate()?;
        self.ai.validate()?;
        self.rate_limit.validate()?;

        let timeout = self.server.request_timeout();
        if self.simulation.validation_delay() >= timeout
            || self.simulation.analysis_delay() >= timeout
        {
            return Err(ValidationError::DelayExceedsTimeout);
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
