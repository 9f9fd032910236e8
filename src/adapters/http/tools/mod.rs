//! Tools gateway HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AudioListResponse, ErrorResponse, FileListResponse, HealthErrorResponse, HealthResponse,
    MarkdownToolRequest, PdfToolRequest, QueryToolRequest, RecordListResponse,
};
pub use handlers::ToolsAppState;
pub use routes::{tools_router, tools_routes};
