//! Countryscope HTTP API
//!
//! Serves the dashboard shell and the chart callbacks, built with Axum.
//!
//! # Endpoints
//!
//! ## Shell
//! - `GET /` - HTML page with the grid, controls and Plotly charts
//!
//! ## Dashboard
//! - `GET /api/v1/dashboard` - Grid layout, control options and defaults
//! - `GET /api/v1/charts` - All four figures for the default inputs
//! - `POST /api/v1/charts/:chart` - One figure for the supplied inputs
//! - `POST /api/v1/dispatch` - Input change → figures of every dependent chart
//! - `GET /api/v1/dataset` - Dataset summary
//!
//! ## Health
//! - `GET /health/live` - Liveness check
//! - `GET /health/ready` - Readiness check
//! - `GET /health` - Full health status
//!
//! ## WebSocket
//! - `GET /ws` - Dispatch messages over a persistent connection
//!
//! # Example
//!
//! ```rust,ignore
//! use countryscope::api::{serve, ApiConfig, AppState};
//! use countryscope::charts::ChartSettings;
//! use countryscope::dashboard::Dispatcher;
//! use countryscope::dataset::load_table;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = load_table("gapminder_unfiltered.csv", Duration::from_secs(30)).await?;
//!     let dispatcher = Arc::new(Dispatcher::new(Arc::new(table), ChartSettings::default())?);
//!     let config = ApiConfig::default();
//!
//!     serve(AppState::new(dispatcher, config.clone()), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::websocket::websocket_handler;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/dashboard", get(routes::dashboard::get_dashboard))
        .route("/charts", get(routes::charts::all_charts))
        .route("/charts/:chart", post(routes::charts::render_chart))
        .route("/dispatch", post(routes::dispatch::dispatch))
        .route("/dataset", get(routes::dataset::get_dataset));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config.cors_origins);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::shell::index))
        .route("/ws", get(websocket_handler))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Any origin when none are configured, otherwise the listed ones
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Countryscope dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Countryscope shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
