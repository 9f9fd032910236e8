//! Axum router configuration for the tools gateway.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    convert_pdf_to_audio, fetch_journals, open_journals, process_markdown, search_and_download,
    tools_health, ToolsAppState,
};

/// Create the tools API router.
///
/// # Routes
///
/// ## Tool invocation
/// - `POST /search_and_download` - search the web for PDFs and download them
/// - `POST /convert_pdf_to_audio` - convert a downloaded PDF to audio
/// - `POST /process_markdown` - turn markdown into presentation slides
/// - `POST /fetch_journals` - fetch academic journal records
/// - `POST /open_journals` - open and download academic papers
///
/// ## Health
/// - `GET /health` - composite availability of the AI core service
pub fn tools_routes() -> Router<ToolsAppState> {
    Router::new()
        .route("/search_and_download", post(search_and_download))
        .route("/convert_pdf_to_audio", post(convert_pdf_to_audio))
        .route("/process_markdown", post(process_markdown))
        .route("/fetch_journals", post(fetch_journals))
        .route("/open_journals", post(open_journals))
        .route("/health", get(tools_health))
}

/// Create the complete tools module router.
///
/// Suitable for mounting at `/api/tools`.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use scholar_bridge::adapters::http::tools::{tools_router, ToolsAppState};
///
/// let app = Router::new()
///     .nest("/api/tools", tools_router())
///     .with_state(app_state);
/// ```
pub fn tools_router() -> Router<ToolsAppState> {
    tools_routes()
}
