//! HTTP Tool Service - reqwest implementation of the ToolService port.
//!
//! Forwards tool invocations to the AI core service and translates every
//! failure into the normalized [`ToolServiceError`] taxonomy. One attempt
//! per invocation: the UI drives long-running conversions interactively,
//! so a silent retry would double a 30-second wait without telling anyone.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ToolServiceConfig::default(); // http://localhost:9000
//! let service = HttpToolService::new(config);
//! let result = service.call("/search_and_download", body).await?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use crate::config::ToolServiceConfig;
use crate::ports::{ToolService, ToolServiceError};

/// Fallback when neither the downstream nor the transport produced a message.
const SERVICE_UNAVAILABLE: &str = "Service unavailable";

/// Reqwest-backed tool service client.
pub struct HttpToolService {
    config: ToolServiceConfig,
    client: Client,
}

impl HttpToolService {
    /// Creates a new client for the configured AI core service.
    ///
    /// Timeouts are applied per request rather than on the client, since
    /// tool calls and health checks run on different budgets.
    pub fn new(config: ToolServiceConfig) -> Self {
        let client = Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url, endpoint)
    }
}

#[async_trait]
impl ToolService for HttpToolService {
    async fn call(&self, endpoint: &str, body: Value) -> Result<Value, ToolServiceError> {
        let response = self
            .client
            .post(self.endpoint_url(endpoint))
            .timeout(self.config.call_timeout())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(endpoint, error = %e, "AI core service call failed");
                transport_error(e, self.config.call_timeout_secs)
            })?;

        read_json_response(response).await
    }

    async fn health(&self) -> Result<Value, ToolServiceError> {
        let response = self
            .client
            .get(self.endpoint_url("/health"))
            .timeout(self.config.health_timeout())
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "AI core service health check failed");
                transport_error(e, self.config.health_timeout_secs)
            })?;

        read_json_response(response).await
    }
}

/// Maps a reqwest failure into the normalized taxonomy.
fn transport_error(error: reqwest::Error, timeout_secs: u64) -> ToolServiceError {
    if error.is_timeout() {
        ToolServiceError::Timeout { timeout_secs }
    } else if error.is_connect() {
        ToolServiceError::unavailable(format!("Connection failed: {}", error))
    } else {
        ToolServiceError::unavailable(resolve_error_message(None, Some(error.to_string())))
    }
}

/// Reads a downstream response body, translating failure statuses.
async fn read_json_response(response: Response) -> Result<Value, ToolServiceError> {
    let status = response.status();

    if status.is_success() {
        return response.json().await.map_err(|e| {
            ToolServiceError::unavailable(format!("Invalid response from tool service: {}", e))
        });
    }

    let body = response.text().await.unwrap_or_default();
    let reported = reported_error(&body);
    let is_reported = reported.is_some();
    let message = resolve_error_message(
        reported,
        Some(format!("Tool service returned status {}", status)),
    );

    Err(if is_reported {
        ToolServiceError::Reported(message)
    } else {
        ToolServiceError::Unavailable(message)
    })
}

/// Extracts the structured `error` field from a failure body, if present.
fn reported_error(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Resolves the client-facing message for a failed call.
///
/// Priority order: the downstream-provided error field, else the transport
/// error message, else the generic unavailable string.
fn resolve_error_message(reported: Option<String>, transport: Option<String>) -> String {
    reported
        .filter(|m| !m.trim().is_empty())
        .or_else(|| transport.filter(|m| !m.trim().is_empty()))
        .unwrap_or_else(|| SERVICE_UNAVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_reported_error() {
        let message = resolve_error_message(
            Some("No PDFs found".to_string()),
            Some("status 500".to_string()),
        );
        assert_eq!(message, "No PDFs found");
    }

    #[test]
    fn resolve_falls_back_to_transport_message() {
        let message = resolve_error_message(None, Some("connection refused".to_string()));
        assert_eq!(message, "connection refused");
    }

    #[test]
    fn resolve_ignores_empty_messages() {
        let message = resolve_error_message(Some("  ".to_string()), Some(String::new()));
        assert_eq!(message, SERVICE_UNAVAILABLE);
    }

    #[test]
    fn resolve_defaults_to_generic_string() {
        assert_eq!(resolve_error_message(None, None), SERVICE_UNAVAILABLE);
    }

    #[test]
    fn reported_error_reads_the_error_field() {
        let body = r#"{"error": "Conversion failed", "status": "error"}"#;
        assert_eq!(reported_error(body), Some("Conversion failed".to_string()));
    }

    #[test]
    fn reported_error_requires_a_string_field() {
        assert_eq!(reported_error(r#"{"error": 42}"#), None);
        assert_eq!(reported_error(r#"{"message": "nope"}"#), None);
        assert_eq!(reported_error("not json"), None);
    }

    #[test]
    fn endpoint_url_joins_base_and_path() {
        let service = HttpToolService::new(ToolServiceConfig {
            base_url: "http://localhost:9000".to_string(),
            ..Default::default()
        });
        assert_eq!(
            service.endpoint_url("/fetch_journals"),
            "http://localhost:9000/fetch_journals"
        );
    }
}
