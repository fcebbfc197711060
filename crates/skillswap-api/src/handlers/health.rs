//! Health check handlers.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Liveness payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Overall status.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
}

/// Detailed health payload.
#[derive(Debug, Clone, Serialize)]
pub struct DetailedHealth {
    /// Overall status.
    pub status: &'static str,
    /// Whether the database answered a round-trip.
    pub database: bool,
}

/// GET /api/health
pub async fn health_check() -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::ok(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/health/detailed
pub async fn detailed_health(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DetailedHealth>>, ApiError> {
    let database = state.db.health_check().await.unwrap_or(false);
    Ok(Json(ApiResponse::ok(DetailedHealth {
        status: if database { "ok" } else { "degraded" },
        database,
    })))
}
