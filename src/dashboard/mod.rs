//! Reactive Dashboard Wiring
//!
//! Connects UI controls and chart events to the chart builders.
//!
//! ## Architecture
//!
//! - **inputs**: Chart and control ids, session input values, relayout parsing
//! - **graph**: Which inputs each chart is rebuilt from (validated, one hop)
//! - **dispatcher**: Rebuilds the dependents of a changed input
//! - **layout**: Default grid arrangement and control panels
//!
//! ## Flow
//!
//! ```text
//! UI event → Input → graph.dependents(input) → render(chart, inputs) → ChartUpdate
//! ```
//!
//! Every session sends its complete `DashboardInputs` with each event, so
//! the dispatcher holds nothing but the read-only table.

mod dispatcher;
mod error;
mod graph;
mod inputs;
mod layout;

pub use dispatcher::{ChartUpdate, Dispatcher};
pub use error::{DashboardError, DashboardResult};
pub use graph::DependencyGraph;
pub use inputs::{
    default_countries, year_range_from_relayout, ChartId, DashboardInputs, Input, PartialInputs,
};
pub use layout::{
    default_grid, describe, ControlKind, ControlSpec, DashboardDescriptor, GridItem, GridLayout,
    PanelSpec, DASHBOARD_TITLE,
};
