//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes liveness and readiness checks.
//!
//! - GET /health/live - Liveness check (process is alive)
//! - GET /health/ready - Readiness check (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness check.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Ready once the table holds rows, which is always true after a
/// successful startup load.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if dataset_loaded(&state) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let loaded = dataset_loaded(&state);

    Json(HealthResponse {
        status: if loaded { "healthy" } else { "unhealthy" }.to_string(),
        dataset: if loaded { "ok" } else { "empty" }.to_string(),
        rows: state.dispatcher.table().len(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn dataset_loaded(state: &AppState) -> bool {
    !state.dispatcher.table().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
