//! Health API Handlers

use axum::Json;
use serde::Serialize;

use shared::util::now_iso;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
}

/// GET /api/health - liveness probe
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        timestamp: now_iso(),
    })
}
