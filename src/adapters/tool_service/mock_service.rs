//! Mock Tool Service for testing.
//!
//! Provides a configurable implementation of the ToolService port, allowing
//! handler tests to run without a live AI core service.
//!
//! # Features
//!
//! - Pre-configured responses (consumed in order)
//! - Error injection for failure-path testing
//! - Simulated delays for timeout testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let service = MockToolService::new()
//!     .with_response(json!({"message": "ok", "files": ["a.pdf"]}));
//!
//! let result = service.call("/search_and_download", body).await?;
//! assert_eq!(service.call_count(), 1);
//! ```

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{ToolService, ToolServiceError};

/// A configured mock outcome.
#[derive(Debug)]
enum MockOutcome {
    /// Return a downstream JSON body.
    Success(Value),
    /// Return an error.
    Error(ToolServiceError),
}

/// One recorded invocation, for verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Endpoint the gateway forwarded to (`/health` for health checks).
    pub endpoint: String,
    /// Body as forwarded (empty object for health checks).
    pub body: Value,
}

/// Mock tool service for testing.
#[derive(Debug, Clone, Default)]
pub struct MockToolService {
    /// Pre-configured outcomes (consumed in order by calls and health checks).
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockToolService {
    /// Creates a new mock with no configured outcomes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful downstream body.
    pub fn with_response(self, body: Value) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Success(body));
        self
    }

    /// Queues an error outcome.
    pub fn with_error(self, error: ToolServiceError) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of recorded invocations.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded invocations.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Pops the next outcome, defaulting to an empty success body.
    fn next_outcome(&self) -> MockOutcome {
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockOutcome::Success(json!({})))
    }

    async fn respond(&self, endpoint: &str, body: Value) -> Result<Value, ToolServiceError> {
        self.calls.lock().unwrap().push(RecordedCall {
            endpoint: endpoint.to_string(),
            body,
        });

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_outcome() {
            MockOutcome::Success(value) => Ok(value),
            MockOutcome::Error(error) => Err(error),
        }
    }
}

#[async_trait]
impl ToolService for MockToolService {
    async fn call(&self, endpoint: &str, body: Value) -> Result<Value, ToolServiceError> {
        self.respond(endpoint, body).await
    }

    async fn health(&self) -> Result<Value, ToolServiceError> {
        self.respond("/health", json!({})).await
    }
}
