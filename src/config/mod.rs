//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `SCHOLAR_BRIDGE` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use scholar_bridge::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Gateway listening on {}", config.server.socket_addr());
//! ```

mod error;
mod server;
mod tool_service;

pub use error::{ConfigError, ValidationError};
pub use server::ServerConfig;
pub use tool_service::ToolServiceConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every field has a working default, so the gateway starts with an empty
/// environment and talks to an AI core service on localhost.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, timeouts, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Downstream AI core service configuration
    #[serde(default)]
    pub tool_service: ToolServiceConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `SCHOLAR_BRIDGE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SCHOLAR_BRIDGE__SERVER__PORT=5003` -> `server.port = 5003`
    /// - `SCHOLAR_BRIDGE__TOOL_SERVICE__BASE_URL=http://localhost:9000`
    ///   -> `tool_service.base_url = ...`
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
                    .prefix("SCHOLAR_BRIDGE")
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
        self.server.validate()?;
        self.tool_service.validate()?;
        Ok(())
    }
}
