//! Tool Service Adapters.
//!
//! Implementations of the ToolService port:
//!
//! - `HttpToolService` - reqwest client for the real AI core service
//! - `MockToolService` - configurable mock for testing

mod http_client;
mod mock_service;

pub use http_client::HttpToolService;
pub use mock_service::{MockToolService, RecordedCall};
