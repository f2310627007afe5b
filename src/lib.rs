//! # Countryscope
//!
//! Interactive dashboard comparing countries across the Gapminder indicators
//! (population, life expectancy, GDP per capita) over time.
//!
//! ## Features
//!
//! - **Four linked charts**: bubble, measure over time, top population, continent pie
//! - **Zoom filtering**: the time series' x-axis range filters the other three charts
//! - **Stateless server**: one read-only table shared by every browser session
//! - **Draggable grid**: layout described by the server, drawn by the browser shell
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading and the in-memory table
//! - [`charts`]: Pure chart builders producing plotly figures
//! - [`dashboard`]: Dependency graph and event dispatch
//! - [`api`]: HTTP server with Axum
//! - [`websocket`]: Dispatch over a persistent connection
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use countryscope::charts::ChartSettings;
//! use countryscope::dashboard::{Dispatcher, Input};
//! use countryscope::dataset::load_table;
//! use serde_json::json;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = load_table("gapminder_unfiltered.csv", Duration::from_secs(30)).await?;
//!     let dispatcher = Dispatcher::new(Arc::new(table), ChartSettings::default())?;
//!
//!     // The user zoomed the time series to the 1990s
//!     let mut inputs = dispatcher.default_inputs();
//!     inputs.zoom = Some(json!({"xaxis.range[0]": 1990, "xaxis.range[1]": 1999}));
//!
//!     for update in dispatcher.dispatch(Input::TimeSeriesZoom, &inputs) {
//!         println!("{}: {} marks", update.chart, update.figure.mark_count());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod websocket;

// Re-export top-level types for convenience
pub use dataset::{
    load_table, Continent, LoadError, LoadResult, Measure, Row, Table, TableSummary, YearRange,
};

pub use charts::{ChartSettings, Figure, PieScope};

pub use dashboard::{
    ChartId, ChartUpdate, DashboardError, DashboardInputs, DependencyGraph, Dispatcher, Input,
    PartialInputs,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use websocket::{websocket_handler, ClientMessage, ServerMessage};

pub use config::{
    generate_default_config, ApiConfig, ChartsConfig, Config, ConfigError, DatasetConfig,
    LoggingConfig,
};
