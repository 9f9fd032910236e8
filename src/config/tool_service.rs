//! AI core service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the downstream AI core service.
///
/// Injected into the HTTP tool service adapter at construction time, never
/// read ad hoc, so tests can point the gateway at a stub downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolServiceConfig {
    /// Base URL of the AI core service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for tool calls in seconds
    #[serde(default = "default_call_timeout")]
    pub call_timeout_secs: u64,

    /// Timeout for health checks in seconds
    #[serde(default = "default_health_timeout")]
    pub health_timeout_secs: u64,
}

impl ToolServiceConfig {
    /// Tool-call timeout as a Duration
    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs)
    }

    /// Health-check timeout as a Duration
    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }

    /// Validate tool service configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidToolServiceUrl);
        }
        if self.base_url.ends_with('/') {
            return Err(ValidationError::TrailingSlashInToolServiceUrl);
        }
        for timeout in [self.call_timeout_secs, self.health_timeout_secs] {
            if timeout == 0 || timeout > 300 {
                return Err(ValidationError::InvalidToolServiceTimeout);
            }
        }
        Ok(())
    }
}

impl Default for ToolServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            call_timeout_secs: default_call_timeout(),
            health_timeout_secs: default_health_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:9000".to_string()
}

fn default_call_timeout() -> u64 {
    30
}

fn default_health_timeout() -> u64 {
    5
}
