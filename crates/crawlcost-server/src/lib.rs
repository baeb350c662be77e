//! HTTP surface for audit operations.
//!
//! `POST /api/audit` runs the remote-mode pipeline on a submitted URL;
//! `GET /api/documents/{id}` serves local-mode metrics for stored
//! documents. Errors map to an HTTP status plus a `{"message": ...}` body.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crawlcost_core::AuditError;
use crawlcost_engine::DocumentAuditor;
use crawlcost_fetch::UrlAuditor;
use crawlcost_store::{ContentStore, FsStore};

#[derive(Deserialize)]
struct AuditRequest {
    url: String,
}

#[derive(Clone)]
struct AppState {
    urls: Arc<UrlAuditor>,
    documents: Arc<DocumentAuditor<FsStore>>,
}

/// Build the audit router. Exposed separately from [`serve`] so tests can
/// bind it to an ephemeral port.
pub fn app(urls: UrlAuditor, documents: DocumentAuditor<FsStore>) -> Router {
    let state = AppState {
        urls: Arc::new(urls),
        documents: Arc::new(documents),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_info))
        .route("/api/audit", post(api_audit))
        .route("/api/documents", get(api_list_documents))
        .route("/api/documents/:id", get(api_document_metrics))
        .layer(cors)
        .with_state(state)
}

pub async fn serve(
    urls: UrlAuditor,
    documents: DocumentAuditor<FsStore>,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    let app = app(urls, documents);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;

    info!("audit server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// GET handler for server info/health check
async fn handle_info() -> Json<serde_json::Value> {
    Json(json!({
        "name": "crawlcost",
        "version": env!("CARGO_PKG_VERSION"),
        "note": "token counts are estimates (4 characters per token), not real tokenizer output",
    }))
}

async fn api_audit(State(state): State<AppState>, Json(req): Json<AuditRequest>) -> Response {
    match state.urls.audit(&req.url).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => error_response(e),
    }
}

async fn api_list_documents(State(state): State<AppState>) -> Response {
    match state.documents.store().list_documents().await {
        Ok(ids) => Json(json!({ "documents": ids })).into_response(),
        Err(e) => error_response(e),
    }
}

async fn api_document_metrics(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.documents.audit_document(&id).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => error_response(e),
    }
}

/// Map the error taxonomy onto HTTP statuses; every error body is a single
/// human-readable message.
fn error_response(err: AuditError) -> Response {
    let status = match &err {
        AuditError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
        AuditError::FetchFailed | AuditError::UpstreamHttp(_) => StatusCode::BAD_GATEWAY,
        AuditError::DocumentNotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(json!({ "message": err.to_string() }))).into_response()
}
