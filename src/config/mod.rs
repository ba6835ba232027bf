//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `GAS_AGENCY` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use gas_agency_crm::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Delivery lead days: {}", config.delivery_lead_days);
//! ```

mod error;

pub use error::ConfigError;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Tracing filter directive, e.g. `info` or `gas_agency_crm=debug`.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Days between booking and the promised delivery date.
    #[serde(default = "default_delivery_lead_days")]
    pub delivery_lead_days: i64,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_delivery_lead_days() -> i64 {
    crate::domain::booking::DEFAULT_DELIVERY_LEAD_DAYS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            delivery_lead_days: default_delivery_lead_days(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present, then reads variables with the
    /// `GAS_AGENCY` prefix, e.g. `GAS_AGENCY__DELIVERY_LEAD_DAYS=2`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GAS_AGENCY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidLeadTime` if the delivery lead time is
    /// outside 1..=30 days.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=30).contains(&self.delivery_lead_days) {
            return Err(ConfigError::InvalidLeadTime(self.delivery_lead_days));
        }
        Ok(())
    }
}
