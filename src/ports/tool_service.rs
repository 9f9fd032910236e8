//! Tool Service Port - Interface to the downstream AI core service.
//!
//! The gateway owns no tool logic: PDF search, audio synthesis, slide
//! generation and journal retrieval all live in the external AI core
//! service, reached over HTTP. This port abstracts that collaborator so
//! handlers can be exercised against a stub implementation in tests.
//!
//! # Design
//!
//! - One `call` per tool invocation, single attempt, bounded wait
//! - Downstream health exposed separately with its own (shorter) budget
//! - Every failure collapsed into a [`ToolServiceError`] with a
//!   client-presentable message; callers never see raw transport errors

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Port for forwarding tool invocations to the AI core service.
///
/// Implementations own the base URL and timeout budgets; the body is
/// forwarded verbatim as the downstream request payload.
#[async_trait]
pub trait ToolService: Send + Sync {
    /// POST `body` to the named downstream endpoint and return its JSON
    /// response.
    ///
    /// A single attempt is made per invocation. Retrying here would change
    /// the latency envelope the UI sees, so it is left to the caller's
    /// judgement (currently: nobody retries).
    async fn call(&self, endpoint: &str, body: Value) -> Result<Value, ToolServiceError>;

    /// GET the downstream health endpoint and return its raw JSON payload.
    async fn health(&self) -> Result<Value, ToolServiceError>;
}

/// Errors surfaced by a tool service implementation.
#[derive(Debug, Error)]
pub enum ToolServiceError {
    /// The downstream responded with a structured error of its own.
    /// The message is propagated to the client verbatim.
    #[error("{0}")]
    Reported(String),

    /// The call exceeded its timeout budget. The downstream request is not
    /// cancelled server-side; the gateway simply stops waiting.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured budget that was exceeded.
        timeout_secs: u64,
    },

    /// Connection refused, DNS failure, unreadable response body, or any
    /// other transport-level failure.
    #[error("{0}")]
    Unavailable(String),
}

impl ToolServiceError {
    /// Creates a downstream-reported error.
    pub fn reported(message: impl Into<String>) -> Self {
        Self::Reported(message.into())
    }

    /// Creates a transport-level failure.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}
