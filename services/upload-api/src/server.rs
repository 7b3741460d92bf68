//! HTTP server for the upload-and-publish service.
//!
//! Endpoints:
//! - `POST /upload` - multipart upload, publishes to GeoServer
//! - `GET /health` - health check

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Extension, Multipart},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use uuid::Uuid;

use geo_common::UploadResponse;
use geoserver_rest::{GeoServerClient, GeoServerRest};
use publisher::PublishWorkflow;

use crate::staging;

/// Uploads can carry whole GeoTIFFs; cap the body well above the
/// axum default of 2 MB.
const MAX_UPLOAD_BYTES: usize = 512 * 1024 * 1024;

/// Shared state for the HTTP server.
pub struct ServerState<R: GeoServerRest> {
    /// Publish workflow bound to the configured GeoServer.
    pub workflow: PublishWorkflow<R>,
    /// Root of the local staging area.
    pub upload_dir: PathBuf,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// POST /upload - stage the files and publish them as a layer.
async fn upload_handler(
    Extension(state): Extension<Arc<ServerState<GeoServerClient>>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let request_id = Uuid::new_v4();
    info!(request_id = %request_id, "Received upload request");

    let batch = match staging::stage_upload(&state.upload_dir, &mut multipart).await {
        Ok(batch) => batch,
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "Upload rejected at staging");
            return Json(UploadResponse::failed(e.to_string()));
        }
    };

    info!(
        request_id = %request_id,
        files = batch.files.len(),
        staging_dir = %batch.staging_dir().display(),
        "Upload staged, starting publish"
    );

    let response = state.workflow.publish(&batch).await;

    info!(
        request_id = %request_id,
        success = response.is_success(),
        "Upload request complete"
    );

    Json(response)
}

/// GET /health - health check.
async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "upload-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the HTTP router.
pub fn build_router(state: Arc<ServerState<GeoServerClient>>) -> Router {
    Router::new()
        .route("/upload", post(upload_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}

/// Start the HTTP server.
pub async fn start_server(
    state: Arc<ServerState<GeoServerClient>>,
    addr: SocketAddr,
) -> anyhow::Result<()> {
    let app = build_router(state);

    info!(addr = %addr, "Starting upload API server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
