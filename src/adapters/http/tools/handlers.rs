//! HTTP handlers for the tools gateway endpoints.
//!
//! All five tool handlers share one pipeline: validate the required field,
//! forward exactly that field to the AI core service, and reshape the
//! downstream result into the client envelope. The per-tool differences
//! live in the [`ToolDescriptor`] table, not in the handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::domain::tools::{SuccessPayload, ToolDescriptor, ToolKind};
use crate::ports::{ToolService, ToolServiceError};

use super::dto::{
    AudioListResponse, ErrorResponse, FileListResponse, HealthErrorResponse, HealthResponse,
    MarkdownToolRequest, PdfToolRequest, QueryToolRequest, RecordListResponse,
};

/// Application state for tools endpoints.
#[derive(Clone)]
pub struct ToolsAppState {
    /// Downstream tool service (injected)
    pub service: Arc<dyn ToolService>,
}

/// Search the web for PDFs matching a query and download them.
///
/// POST /search_and_download
pub async fn search_and_download(
    State(state): State<ToolsAppState>,
    Json(request): Json<QueryToolRequest>,
) -> Response {
    run_tool(&state, ToolKind::SearchAndDownload, request.query).await
}

/// Convert a previously downloaded PDF into audio files.
///
/// POST /convert_pdf_to_audio
pub async fn convert_pdf_to_audio(
    State(state): State<ToolsAppState>,
    Json(request): Json<PdfToolRequest>,
) -> Response {
    run_tool(&state, ToolKind::ConvertPdfToAudio, request.pdf_file).await
}

/// Turn markdown content into presentation slides.
///
/// POST /process_markdown
pub async fn process_markdown(
    State(state): State<ToolsAppState>,
    Json(request): Json<MarkdownToolRequest>,
) -> Response {
    run_tool(&state, ToolKind::ProcessMarkdown, request.markdown_content).await
}

/// Fetch academic journal records matching a query.
///
/// POST /fetch_journals
pub async fn fetch_journals(
    State(state): State<ToolsAppState>,
    Json(request): Json<QueryToolRequest>,
) -> Response {
    run_tool(&state, ToolKind::FetchJournals, request.query).await
}

/// Open and download academic papers matching a query.
///
/// POST /open_journals
pub async fn open_journals(
    State(state): State<ToolsAppState>,
    Json(request): Json<QueryToolRequest>,
) -> Response {
    run_tool(&state, ToolKind::OpenJournals, request.query).await
}

/// Composite availability of the gateway and the AI core service.
///
/// GET /health
///
/// The only path where downstream unavailability is a reportable condition
/// rather than a per-call error.
pub async fn tools_health(State(state): State<ToolsAppState>) -> Response {
    match state.service.health().await {
        Ok(payload) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                tools_available: true,
                python_service: payload,
                message: "Tools service is healthy".to_string(),
            }),
        )
            .into_response(),
        Err(error) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthErrorResponse {
                status: "error".to_string(),
                tools_available: false,
                error: "AI core service is not available".to_string(),
                message: error.to_string(),
            }),
        )
            .into_response(),
    }
}

/// Shared validate -> forward -> envelope pipeline for all five tools.
///
/// Validation precedes forwarding unconditionally: a request missing its
/// required field never reaches the AI core service. The check is
/// presence/non-emptiness only; content validation belongs downstream.
async fn run_tool(state: &ToolsAppState, kind: ToolKind, field: Option<String>) -> Response {
    let descriptor = kind.descriptor();

    let value = match field.filter(|v| !v.is_empty()) {
        Some(value) => value,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: descriptor.missing_field_error(),
                    status: "error".to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::info!(tool = descriptor.name, "forwarding tool request");

    let body = json!({ descriptor.required_field: value });
    match state.service.call(descriptor.downstream_path, body).await {
        Ok(result) => success_envelope(descriptor, result),
        Err(error) => failure_envelope(descriptor, error),
    }
}

/// Remaps a downstream success body into the client envelope, defaulting
/// any omitted field (empty file lists, `"[]"` record data, the per-tool
/// fallback message).
fn success_envelope(descriptor: &ToolDescriptor, result: Value) -> Response {
    let message = result
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or(descriptor.fallback_message)
        .to_string();
    let status = "success".to_string();

    match descriptor.payload {
        SuccessPayload::Files => {
            let files = string_list(result.get("files"));
            tracing::info!(tool = descriptor.name, files = files.len(), "tool request completed");
            Json(FileListResponse { message, files, status }).into_response()
        }
        SuccessPayload::AudioFiles => {
            let audio_files = string_list(result.get("audio_files"));
            tracing::info!(
                tool = descriptor.name,
                files = audio_files.len(),
                "tool request completed"
            );
            Json(AudioListResponse { message, audio_files, status }).into_response()
        }
        SuccessPayload::Records => {
            let data = record_data(result.get("data"));
            tracing::info!(tool = descriptor.name, "tool request completed");
            Json(RecordListResponse { message, data, status }).into_response()
        }
    }
}

fn failure_envelope(descriptor: &ToolDescriptor, error: ToolServiceError) -> Response {
    tracing::error!(tool = descriptor.name, error = %error, "tool request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: error.to_string(),
            status: "error".to_string(),
        }),
    )
        .into_response()
}

/// Downstream file lists are optional; non-string entries are dropped
/// rather than failing the whole response.
fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Journal record data passes through untouched; absent or empty data
/// becomes the serialized empty list the UI expects.
fn record_data(value: Option<&Value>) -> Value {
    match value {
        None | Some(Value::Null) => Value::String("[]".to_string()),
        Some(Value::String(s)) if s.is_empty() => Value::String("[]".to_string()),
        Some(value) => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::tool_service::MockToolService;
    use pretty_assertions::assert_eq;

    async fn read_json(response: Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn state_with(mock: &MockToolService) -> ToolsAppState {
        ToolsAppState {
            service: Arc::new(mock.clone()),
        }
    }

    #[tokio::test]
    async fn missing_field_is_rejected_without_forwarding() {
        let mock = MockToolService::new();
        let state = state_with(&mock);

        let response = process_markdown(
            State(state),
            Json(MarkdownToolRequest { markdown_content: None }),
        )
        .await;

        let (status, body) = read_json(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "Missing markdown_content parameter", "status": "error"})
        );
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn empty_field_counts_as_missing() {
        let mock = MockToolService::new();
        let state = state_with(&mock);

        let response = search_and_download(
            State(state),
            Json(QueryToolRequest { query: Some(String::new()) }),
        )
        .await;

        let (status, body) = read_json(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing query parameter");
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn success_is_remapped_into_envelope() {
        let mock = MockToolService::new()
            .with_response(json!({"message": "ok", "files": ["a.pptx"]}));
        let state = state_with(&mock);

        let response = process_markdown(
            State(state),
            Json(MarkdownToolRequest {
                markdown_content: Some("### Slide 1".to_string()),
            }),
        )
        .await;

        let (status, body) = read_json(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"message": "ok", "files": ["a.pptx"], "status": "success"})
        );

        // Exactly the validated field is forwarded, nothing else.
        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].endpoint, "/process_markdown");
        assert_eq!(calls[0].body, json!({"markdown_content": "### Slide 1"}));
    }

    #[tokio::test]
    async fn omitted_downstream_fields_get_defaults() {
        let mock = MockToolService::new().with_response(json!({}));
        let state = state_with(&mock);

        let response = search_and_download(
            State(state),
            Json(QueryToolRequest {
                query: Some("sparse attention".to_string()),
            }),
        )
        .await;

        let (status, body) = read_json(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "message": "Search and download completed",
                "files": [],
                "status": "success"
            })
        );
    }

    #[tokio::test]
    async fn journal_data_defaults_to_empty_list_string() {
        let mock = MockToolService::new().with_response(json!({"message": "Journals fetched"}));
        let state = state_with(&mock);

        let response = fetch_journals(
            State(state),
            Json(QueryToolRequest { query: Some("nature".to_string()) }),
        )
        .await;

        let (status, body) = read_json(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], "[]");
        assert_eq!(body["status"], "success");
    }

    #[tokio::test]
    async fn audio_conversion_uses_audio_files_key() {
        let mock = MockToolService::new()
            .with_response(json!({"audio_files": ["chapter1.mp3", "chapter2.mp3"]}));
        let state = state_with(&mock);

        let response = convert_pdf_to_audio(
            State(state),
            Json(PdfToolRequest { pdf_file: Some("paper.pdf".to_string()) }),
        )
        .await;

        let (status, body) = read_json(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["audio_files"], json!(["chapter1.mp3", "chapter2.mp3"]));
        assert_eq!(body["message"], "Audio conversion completed");
    }

    #[tokio::test]
    async fn downstream_error_becomes_error_envelope() {
        let mock = MockToolService::new()
            .with_error(ToolServiceError::reported("No PDFs found for query"));
        let state = state_with(&mock);

        let response = open_journals(
            State(state),
            Json(QueryToolRequest { query: Some("obscure".to_string()) }),
        )
        .await;

        let (status, body) = read_json(response).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"error": "No PDFs found for query", "status": "error"})
        );
    }

    #[tokio::test]
    async fn health_reports_available_downstream() {
        let mock = MockToolService::new()
            .with_response(json!({"status": "ok", "embedding_model_name": "all-MiniLM-L6-v2"}));
        let state = state_with(&mock);

        let (status, body) = read_json(tools_health(State(state)).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["tools_available"], true);
        assert_eq!(body["python_service"]["embedding_model_name"], "all-MiniLM-L6-v2");
    }

    #[tokio::test]
    async fn health_reports_unavailable_downstream() {
        let mock = MockToolService::new()
            .with_error(ToolServiceError::Timeout { timeout_secs: 5 });
        let state = state_with(&mock);

        let (status, body) = read_json(tools_health(State(state)).await).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "error");
        assert_eq!(body["tools_available"], false);
        assert_eq!(body["error"], "AI core service is not available");
        assert_eq!(body["message"], "request timed out after 5s");
    }

    #[test]
    fn string_list_drops_non_string_entries() {
        let value = json!(["a.pdf", 42, "b.pdf", null]);
        assert_eq!(string_list(Some(&value)), vec!["a.pdf", "b.pdf"]);
        assert_eq!(string_list(None), Vec::<String>::new());
        assert_eq!(string_list(Some(&json!("not a list"))), Vec::<String>::new());
    }

    #[test]
    fn record_data_passes_values_through() {
        let serialized = json!("[{\"title\":\"Nature\"}]");
        assert_eq!(record_data(Some(&serialized)), serialized);
        assert_eq!(record_data(None), json!("[]"));
        assert_eq!(record_data(Some(&Value::Null)), json!("[]"));
        assert_eq!(record_data(Some(&json!(""))), json!("[]"));
    }
}
