//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the gateway and the outside world. Adapters implement these ports.
//!
//! - `ToolService` - Port for the downstream AI core service that performs
//!   the actual document/search/audio processing

mod tool_service;

pub use tool_service::{ToolService, ToolServiceError};
