use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Catalog backend in use (`postgres`, `rest` or `unconfigured`).
    pub store: &'static str,
    /// Whether the catalog store is reachable.
    pub store_healthy: bool,
}

/// GET /health -- returns service and store health.
///
/// The service keeps serving fallback data without a store, so an
/// unreachable store reports `degraded` rather than failing the check.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = state.catalog.ping().await.is_ok();

    let status = if store_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store: state.catalog.backend(),
        store_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
