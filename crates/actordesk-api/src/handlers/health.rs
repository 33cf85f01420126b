//! Health check handlers.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::{ApiResponse, DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    }))
}

/// GET /api/health/detailed
///
/// Probes the database by counting actors. Answers 503 when it fails.
pub async fn health_detailed(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<DetailedHealthResponse>>) {
    let started = Instant::now();
    match state.actors.count().await {
        Ok(count) => (
            StatusCode::OK,
            Json(ApiResponse::ok(DetailedHealthResponse {
                status: "ok".to_string(),
                database: "connected".to_string(),
                database_latency_ms: Some(started.elapsed().as_millis() as u64),
                actor_count: Some(count),
            })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::degraded(
                    DetailedHealthResponse {
                        status: "degraded".to_string(),
                        database: "unavailable".to_string(),
                        database_latency_ms: None,
                        actor_count: None,
                    },
                    "Database check failed",
                )),
            )
        }
    }
}
