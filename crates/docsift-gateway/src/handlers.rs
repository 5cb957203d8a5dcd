//! HTTP request handlers for the Gateway service.
//!
//! Exposes the document processor and analyzer over HTTP. Each request gets
//! its own processor or analyzer instance; history logs are shared.

use crate::config::{ConfigError, GatewayConfig};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use docsift_analyzer::{AiAnalyzer, AnalyzerConfig};
use docsift_domain::{
    AnalysisOutcome, AnalysisReport, DocumentData, HistoryStore, ProcessingResult, SharedHistory,
};
use docsift_processor::{DocumentProcessor, ProcessorConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Settings for per-request processors
    pub processor_config: Arc<ProcessorConfig>,
    /// Settings for per-request analyzers
    pub analyzer_config: Arc<AnalyzerConfig>,
    /// Successfully processed documents, if history is enabled
    pub documents: Option<SharedHistory<ProcessingResult>>,
    /// Completed analysis reports, if history is enabled
    pub analyses: Option<SharedHistory<AnalysisReport>>,
}

impl AppState {
    /// Build state from a gateway configuration
    pub fn from_config(config: &GatewayConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let (documents, analyses) = if config.history_capacity == 0 {
            (None, None)
        } else {
            (
                Some(SharedHistory::new(config.history_capacity)),
                Some(SharedHistory::new(config.history_capacity)),
            )
        };

        Ok(Self {
            processor_config: Arc::new(config.processor.clone()),
            analyzer_config: Arc::new(config.analyzer.clone()),
            documents,
            analyses,
        })
    }

    fn processor(&self) -> Result<DocumentProcessor, AppError> {
        let processor = DocumentProcessor::new(self.processor_config.as_ref().clone())
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(match &self.documents {
            Some(history) => processor.with_history(history.clone()),
            None => processor,
        })
    }

    fn analyzer(&self) -> Result<AiAnalyzer, AppError> {
        let analyzer = AiAnalyzer::new(self.analyzer_config.as_ref().clone())
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(match &self.analyses {
            Some(history) => analyzer.with_history(history.clone()),
            None => analyzer,
        })
    }
}

/// Function-style response: a status code plus a JSON-encoded body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// HTTP-style status code
    pub status_code: u16,
    /// Serialized record or `{"error": ...}` object
    pub body: String,
}

impl Envelope {
    /// Wrap a handler outcome
    pub fn from_outcome<T: Serialize>(outcome: Result<T, AppError>) -> Self {
        let body = outcome.and_then(|record| serde_json::to_string(&record).map_err(AppError::from));
        match body {
            Ok(body) => Envelope {
                status_code: StatusCode::OK.as_u16(),
                body,
            },
            Err(e) => e.into_envelope(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Entries in the processed-documents log
    pub documents_recorded: usize,
    /// Entries in the analysis log
    pub analyses_recorded: usize,
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
    /// The event was missing a field or could not be decoded
    BadRequest(String),
    /// Unhandled fault
    Internal(String),
}

impl AppError {
    /// Status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error message
    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest(msg) | AppError::Internal(msg) => msg,
        }
    }

    fn into_envelope(self) -> Envelope {
        let body = serde_json::json!({ "error": self.message() }).to_string();
        Envelope {
            status_code: self.status().as_u16(),
            body,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.message().to_string(),
        });
        (status, body).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(e: tokio::task::JoinError) -> Self {
        AppError::Internal(e.to_string())
    }
}

/// Handle a processing event `{"document_path": ...}`
pub fn process_event(state: &AppState, event: &Value) -> Result<ProcessingResult, AppError> {
    let path = event
        .get("document_path")
        .and_then(Value::as_str)
        .filter(|path| !path.is_empty())
        .ok_or_else(|| AppError::BadRequest("document_path is required".to_string()))?;

    let mut processor = state.processor()?;
    Ok(processor.process(path))
}

/// Handle an analysis event `{"document_data": {"content": ...}}`
pub fn analyze_event(state: &AppState, event: &Value) -> Result<AnalysisOutcome, AppError> {
    let document_data = event
        .get("document_data")
        .filter(|value| !is_blank(value))
        .ok_or_else(|| AppError::BadRequest("document_data is required".to_string()))?;

    let document_data: DocumentData = serde_json::from_value(document_data.clone())
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let mut analyzer = state.analyzer()?;
    Ok(analyzer.analyze(&document_data))
}

/// JSON values that count as "not provided"
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

async fn run_process(
    state: AppState,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<ProcessingResult, AppError> {
    let Json(event) = payload?;
    tokio::task::spawn_blocking(move || process_event(&state, &event)).await?
}

async fn run_analyze(
    state: AppState,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<AnalysisOutcome, AppError> {
    let Json(event) = payload?;
    tokio::task::spawn_blocking(move || analyze_event(&state, &event)).await?
}

fn log_rejection<T>(route: &str, outcome: &Result<T, AppError>) {
    if let Err(e) = outcome {
        warn!("{} rejected with {}: {}", route, e.status(), e.message());
    }
}

/// POST /process - Process a document
async fn process(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ProcessingResult>, AppError> {
    let outcome = run_process(state, payload).await;
    log_rejection("/process", &outcome);
    outcome.map(Json)
}

/// POST /analyze - Analyze document content
async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalysisOutcome>, AppError> {
    let outcome = run_analyze(state, payload).await;
    log_rejection("/analyze", &outcome);
    outcome.map(Json)
}

/// POST /invoke/process - Process a document, replying with an envelope
async fn invoke_process(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Json<Envelope> {
    let outcome = run_process(state, payload).await;
    log_rejection("/invoke/process", &outcome);
    Json(Envelope::from_outcome(outcome))
}

/// POST /invoke/analyze - Analyze content, replying with an envelope
async fn invoke_analyze(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Json<Envelope> {
    let outcome = run_analyze(state, payload).await;
    log_rejection("/invoke/analyze", &outcome);
    Json(Envelope::from_outcome(outcome))
}

/// GET /history/documents - Successfully processed documents, oldest first
async fn document_history(State(state): State<AppState>) -> Json<Vec<ProcessingResult>> {
    Json(state.documents.map(|h| h.snapshot()).unwrap_or_default())
}

/// GET /history/analyses - Completed analysis reports, oldest first
async fn analysis_history(State(state): State<AppState>) -> Json<Vec<AnalysisReport>> {
    Json(state.analyses.map(|h| h.snapshot()).unwrap_or_default())
}

/// GET /health - Health check
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        documents_recorded: state.documents.as_ref().map_or(0, |h| h.len()),
        analyses_recorded: state.analyses.as_ref().map_or(0, |h| h.len()),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    info!("Registering gateway routes");
    AxumRouter::new()
        .route("/process", post(process))
        .route("/analyze", post(analyze))
        .route("/invoke/process", post(invoke_process))
        .route("/invoke/analyze", post(invoke_analyze))
        .route("/history/documents", get(document_history))
        .route("/history/analyses", get(analysis_history))
        .route("/health", get(health_check))
        .with_state(state)
}
