// Axum API Server Module
//
// Purpose: HTML form + JSON API around the build analyzer.
// All analysis is synchronous and cheap, so handlers call it inline.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect},
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};
use anyhow::Context;
use serde_json::Value;
use std::sync::Arc;

use crate::advisor::{load_or_embedded, PresetTable};
use crate::analytics::AnalyticsLog;
use crate::cli_check::{check_cli_dump, CliVerdict};
use crate::config::ServerConfig;
use crate::doctor::{analyze_build, AnalysisReport, BuildInputs};
use crate::error::DoctorError;
use crate::form::{parse_build_inputs, FormFields};
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    /// None when neither the configured nor the embedded table could be parsed
    pub presets: Option<Arc<PresetTable>>,
    pub analytics: Option<Arc<AnalyticsLog>>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading preset table...");
        let presets = load_or_embedded(config.presets_path.as_deref());

        let analytics = match &config.analytics_log {
            Some(path) => {
                tracing::info!("Opening analytics log...");
                let log = AnalyticsLog::open(path)
                    .with_context(|| format!("Failed to open analytics log {:?}", path))?;
                Some(log)
            }
            None => None,
        };

        Ok(Self::from_parts(presets, analytics))
    }

    pub fn from_parts(presets: Option<PresetTable>, analytics: Option<AnalyticsLog>) -> Self {
        Self {
            presets: presets.map(Arc::new),
            analytics: analytics.map(Arc::new),
        }
    }

    /// Analyze a build and append it to the analytics log (if enabled).
    /// Logging failures are reported but never fail the request.
    pub fn analyze(&self, inputs: &BuildInputs) -> AnalysisReport {
        let report = analyze_build(inputs, self.presets.as_deref());

        if let Some(log) = &self.analytics {
            if let Err(e) = log.record(inputs, &report) {
                tracing::warn!("Analytics write to {:?} failed: {}", log.path(), e);
            }
        }

        report
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Landing + health
        .route("/", get(loading))
        .route("/ping", get(ping))
        .route("/health", get(health_check))

        // HTML form
        .route("/app", get(pages::app_page).post(pages::app_submit))

        // JSON API
        .route("/api/analyze", post(analyze_json))
        .route("/api/cli-check", post(cli_check_json))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn loading() -> Redirect {
    Redirect::to("/app")
}

async fn ping() -> &'static str {
    "pong"
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "presets": state.presets.as_ref().map(|p| p.version.clone()),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn analyze_json(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Map<String, Value>>, JsonRejection>,
) -> Result<Json<AnalysisReport>, AppError> {
    let Json(payload) = payload?;
    let fields = fields_from_json(&payload);
    let inputs = parse_build_inputs(&fields)?;

    tracing::info!("Analyzing {} build via JSON API", inputs.style);

    Ok(Json(state.analyze(&inputs)))
}

#[derive(Debug, serde::Deserialize)]
struct CliCheckRequest {
    #[serde(default)]
    cli: String,
}

async fn cli_check_json(Json(payload): Json<CliCheckRequest>) -> Json<CliVerdict> {
    Json(check_cli_dump(&payload.cli))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Flatten a JSON object into form fields; numbers and booleans become text
fn fields_from_json(payload: &serde_json::Map<String, Value>) -> FormFields {
    payload
        .iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((key.clone(), text))
        })
        .collect()
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        if err.is_validation() {
            AppError::BadRequest(err.to_string())
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
