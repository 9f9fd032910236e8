//! Data transfer objects for the tools gateway endpoints.
//!
//! The response shapes are a wire contract with the browser UI: exactly one
//! of (`status:"success"` with the tool-specific data field) or
//! (`status:"error"` with `error`) per response, never both.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Request body for query-driven tools (search, fetch/open journals).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryToolRequest {
    /// Search or retrieval query
    pub query: Option<String>,
}

/// Request body for PDF-to-audio conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfToolRequest {
    /// Name of a previously downloaded PDF
    pub pdf_file: Option<String>,
}

/// Request body for markdown-to-slides processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownToolRequest {
    /// Markdown source to turn into slides
    pub markdown_content: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Success envelope for tools producing a file list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileListResponse {
    /// Human-readable outcome summary
    pub message: String,
    /// Generated or downloaded file names
    pub files: Vec<String>,
    /// Always `"success"`
    pub status: String,
}

/// Success envelope for PDF-to-audio conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioListResponse {
    /// Human-readable outcome summary
    pub message: String,
    /// Generated audio file names
    pub audio_files: Vec<String>,
    /// Always `"success"`
    pub status: String,
}

/// Success envelope for journal tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordListResponse {
    /// Human-readable outcome summary
    pub message: String,
    /// Opaque serialized journal records, passed through from downstream
    pub data: Value,
    /// Always `"success"`
    pub status: String,
}

/// Error envelope shared by every failure path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Client-presentable failure message
    pub error: String,
    /// Always `"error"`
    pub status: String,
}

/// Composite health report when the AI core service is reachable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`
    pub status: String,
    /// Whether tool calls can currently be served
    pub tools_available: bool,
    /// Raw health payload from the AI core service
    pub python_service: Value,
    /// Human-readable summary
    pub message: String,
}

/// Composite health report when the AI core service is unreachable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthErrorResponse {
    /// Always `"error"`
    pub status: String,
    /// Whether tool calls can currently be served
    pub tools_available: bool,
    /// Fixed unavailability notice
    pub error: String,
    /// Underlying failure message
    pub message: String,
}
