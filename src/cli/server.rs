//! HTTP server mode for REST API access to spec generation

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::analyze::MergeStrategy;
use crate::config::{ServerConfig, SpecOptions, DEFAULT_ENTITY, DEFAULT_SOURCE_ROOT};
use crate::error::{Error, Result};
use crate::spec::SpecBuilder;

/// Largest request body the generate endpoint accepts
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Request body for the generate endpoint
#[derive(Debug, Deserialize)]
pub struct SpecRequest {
    /// Payload to analyze; absent or null is rejected
    #[serde(default)]
    pub json_data: Option<Value>,
    /// Entity label
    #[serde(default = "default_entity")]
    pub entity: String,
    /// Record list selector
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// Master field merge strategy
    #[serde(default)]
    pub merge_strategy: MergeStrategy,
    /// Field names that always become child tables
    #[serde(default)]
    pub force_child_tables: Vec<String>,
}

fn default_entity() -> String {
    DEFAULT_ENTITY.to_string()
}

fn default_source_root() -> String {
    DEFAULT_SOURCE_ROOT.to_string()
}

impl SpecRequest {
    /// Split into the payload and the generation options
    pub fn into_parts(self) -> Result<(Value, SpecOptions)> {
        let payload = self
            .json_data
            .ok_or_else(|| Error::validation("missing json_data"))?;

        let options = SpecOptions {
            entity: self.entity,
            source_root: self.source_root,
            merge_strategy: self.merge_strategy,
            force_child_tables: self.force_child_tables,
        };

        Ok((payload, options))
    }
}

/// Build the application router
pub fn build_router() -> Router {
    // Build CORS layer - allow all origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/spec/generate", post(generate))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    let app = build_router();

    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {}: {e}", config.port)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::internal(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Generate a spec from the posted payload
///
/// The body is parsed as JSON whatever its `Content-Type`.
async fn generate(body: std::result::Result<Bytes, BytesRejection>) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!("Failed to read request body: {}", rejection.body_text());
            return error_response(rejection.status(), rejection.body_text());
        }
    };

    let req = match serde_json::from_slice::<SpecRequest>(&body) {
        Ok(req) => req,
        Err(e) => {
            tracing::warn!("Rejected request body: {e}");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("invalid request body: {e}"),
            );
        }
    };

    match run_generate(req) {
        Ok(spec) => (StatusCode::OK, Json(json!({ "spec": spec }))).into_response(),
        Err(e) => {
            let status =
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            if e.is_client_error() {
                tracing::warn!("Rejected request: {e}");
            } else {
                tracing::error!("Spec generation failed: {e}");
            }
            error_response(status, e.to_string())
        }
    }
}

fn run_generate(req: SpecRequest) -> Result<Value> {
    let (payload, options) = req.into_parts()?;
    let spec = SpecBuilder::new(options).build(&payload);

    tracing::info!(
        entity = %spec.entity,
        tables = spec.tables.len(),
        "Generated spec"
    );

    serde_json::to_value(&spec).map_err(|e| Error::internal(e.to_string()))
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}
