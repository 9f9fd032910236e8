//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the gateway to external systems:
//! - `http` - REST API exposed to the browser UI
//! - `tool_service` - clients for the downstream AI core service

pub mod http;
pub mod tool_service;

pub use tool_service::{HttpToolService, MockToolService};
