use axum::extract::State;
use axum::{routing::get, Json, Router};
use idi_core::types::Timestamp;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub db_healthy: bool,
}

#[derive(Serialize)]
pub struct DbTimeResponse {
    pub db_time: Timestamp,
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = idi_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// GET /health/db -- the database server's clock, or 500 if it cannot be reached.
async fn db_time(State(state): State<AppState>) -> AppResult<Json<DbTimeResponse>> {
    let db_time = idi_db::database_time(&state.pool)
        .await
        .map_err(|e| AppError::InternalError(format!("Database unreachable: {e}")))?;
    Ok(Json(DbTimeResponse { db_time }))
}

/// Mount health check routes at the root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/db", get(db_time))
}
