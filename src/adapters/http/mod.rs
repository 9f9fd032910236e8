//! HTTP adapters - REST API implementations.

pub mod tools;

// Re-export key types for convenience
pub use tools::tools_router;
pub use tools::ToolsAppState;
