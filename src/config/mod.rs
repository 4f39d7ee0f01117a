//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TICKET_SERVICE` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields the standard
//! venue rules.
//!
//! # Example
//!
//! ```no_run
//! use ticket_service::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.logging.init_tracing().expect("Failed to install tracing");
//! ```

mod error;
mod logging;
mod pricing;
mod purchase;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use pricing::PricingConfig;
pub use purchase::PurchaseConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Purchase limits
    #[serde(default)]
    pub purchase: PurchaseConfig,

    /// Unit prices per ticket type
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TICKET_SERVICE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TICKET_SERVICE__PURCHASE__MAX_TICKETS=25` -> `purchase.max_tickets = 25`
    /// - `TICKET_SERVICE__PRICING__ADULT_MINOR_UNITS=2500` -> `pricing.adult_minor_units = 2500`
    /// - `TICKET_SERVICE__LOGGING__FORMAT=json` -> `logging.format = json`
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
                    .prefix("TICKET_SERVICE")
                    .prefix_separator("__")
                    .separator("__"),
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
        self.purchase.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
