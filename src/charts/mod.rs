//! Countryscope Charts
//!
//! Pure functions from the shared table to plotly figures. Each chart
//! has three layers:
//!
//! - a **view** function that filters and aggregates rows (`bubble_view`, ...)
//! - a **figure** function that maps the view to a plotly figure
//! - a **build** function chaining the two
//!
//! # Pipeline
//!
//! ```text
//! Table → range filter → view (snapshot | series | ranking | totals) → Figure
//! ```
//!
//! Every builder accepts an empty view and produces an empty chart rather
//! than an error.

pub mod bubble;
pub mod figure;
pub mod palette;
pub mod proportion;
pub mod timeseries;
pub mod top_population;

pub use bubble::{
    build_bubble_chart, bubble_figure, bubble_view, BubbleParams, BubblePoint, BubbleView,
};
pub use figure::{Figure, Layout, Trace};
pub use proportion::{
    build_proportion_chart, proportion_figure, proportion_view, ContinentShare, PieScope,
    ProportionView,
};
pub use timeseries::{
    build_time_series_chart, time_series_figure, time_series_view, Series, TimeSeriesParams,
    TimeSeriesView,
};
pub use top_population::{
    build_top_population_chart, top_population_figure, top_population_view, RankedCountry,
    TopPopulationView, DEFAULT_TOP_N,
};

/// Largest bubble diameter, in pixels
pub const DEFAULT_BUBBLE_SIZE_MAX: f64 = 60.0;

/// Tunables shared by the chart builders
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSettings {
    /// Number of bars in the top population chart
    pub top_n: usize,
    pub bubble_size_max: f64,
    pub pie_scope: PieScope,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            bubble_size_max: DEFAULT_BUBBLE_SIZE_MAX,
            pie_scope: PieScope::default(),
        }
    }
}
