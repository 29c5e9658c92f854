//! Health check endpoints

use crate::ServerResult;
use axum::Json;
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
}

/// Health check endpoint
pub async fn health_check() -> ServerResult<Json<HealthResponse>> {
    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };
    Ok(Json(response))
}

/// Readiness check endpoint. Portico has no external dependencies to probe,
/// so readiness coincides with liveness.
pub async fn readiness_check() -> ServerResult<Json<HealthResponse>> {
    let response = HealthResponse {
        status: "ready".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };
    Ok(Json(response))
}

/// Version endpoint
pub async fn version() -> ServerResult<Json<VersionResponse>> {
    let response = VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Ok(Json(response))
}
