use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};
use placement_core::models::drive::DriveStatus;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    published_drives: usize,
    default_timezone: String,
}

#[derive(Serialize)]
struct VersionResponse {
    service: &'static str,
    version: &'static str,
}

/// Liveness probe that also touches the drive store.
async fn health_check(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<HealthResponse>, AppError> {
    let published = state.drives.list_drives(Some(DriveStatus::Published)).await?;
    Ok(Json(HealthResponse {
        status: "ok",
        published_drives: published.len(),
        default_timezone: state.default_timezone.name().to_string(),
    }))
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
}
