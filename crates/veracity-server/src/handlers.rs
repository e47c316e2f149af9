//! HTTP request handlers for the analysis service.
//!
//! Implements the upload analysis and health check endpoints using axum.

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;
use veracity_probe::{mime, Analyzer, AnalysisReport};

/// Multipart field name the upload form uses
const FILE_FIELD: &str = "file";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Probes wired to the resolved provenance tool
    pub analyzer: Arc<Analyzer>,
    /// Largest accepted request body in bytes
    pub max_upload_bytes: usize,
}

/// Analysis response: a report tagged with its request id
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Identifier logged alongside this analysis
    pub analysis_id: String,
    /// The report
    #[serde(flatten)]
    pub report: AnalysisReport,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// "ok", or "degraded" when the provenance tool is missing
    pub status: String,
    /// Path of the provenance tool, if found
    pub provenance_tool: Option<String>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Malformed or oversized upload
    Upload(StatusCode, String),
    /// Request carried no file part
    MissingFile,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Upload(status, msg) => (status, msg),
            AppError::MissingFile => (StatusCode::BAD_REQUEST, "No file provided".to_string()),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::Upload(e.status(), e.body_text())
    }
}

/// An uploaded image
struct Upload {
    bytes: Vec<u8>,
    mime_type: String,
}

/// Take the first file part from the form
///
/// A part counts as the file if it has a filename or is named `file`. The
/// mime type comes from the part header, else from the filename extension.
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart.next_field().await? {
        let file_name = field.file_name().map(str::to_string);
        if file_name.is_none() && field.name() != Some(FILE_FIELD) {
            continue;
        }

        let mime_type = field
            .content_type()
            .filter(|content_type| *content_type != "application/octet-stream")
            .map(str::to_string)
            .or_else(|| {
                file_name
                    .as_deref()
                    .and_then(|name| mime::mime_for_path(std::path::Path::new(name)))
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let bytes = field.bytes().await?.to_vec();
        return Ok(Upload { bytes, mime_type });
    }

    Err(AppError::MissingFile)
}

/// POST /analyze - Analyze an uploaded image
///
/// If the client goes away, the handler future is dropped, which kills the
/// provenance tool and removes its scratch file.
async fn analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let upload = read_upload(&mut multipart).await?;
    let analysis_id = Uuid::now_v7().to_string();
    let span = info_span!("analysis", id = %analysis_id);

    let analysis = async {
        info!("Received {} bytes, {}", upload.bytes.len(), upload.mime_type);

        let analysis = state
            .analyzer
            .analyze(&upload.bytes, &upload.mime_type)
            .await;

        if let Some(error) = analysis.provenance.error() {
            warn!("Provenance probe failed: {}", error);
        }
        analysis
    }
    .instrument(span)
    .await;

    Ok(Json(AnalysisResponse {
        analysis_id,
        report: AnalysisReport::from(&analysis),
    }))
}

/// GET /health - Service health
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    let location = state.analyzer.tool_location();
    let status = if location.is_available() { "ok" } else { "degraded" };

    Json(HealthCheckResponse {
        status: status.to_string(),
        provenance_tool: location.path().map(|path| path.display().to_string()),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    AxumRouter::new()
        .route("/analyze", post(analyze_upload))
        .route("/health", get(health_check))
        .layer(body_limit)
        .with_state(state)
}
