//! Dashboard wiring errors

use thiserror::Error;

use super::inputs::{ChartId, Input};

#[derive(Error, Debug, PartialEq)]
pub enum DashboardError {
    /// A chart id from a request does not name one of the four charts
    #[error("Unknown chart: {0}")]
    UnknownChart(String),

    /// A control id from a request does not name a known input
    #[error("Unknown input: {0}")]
    UnknownInput(String),

    /// A chart was declared twice in the dependency graph
    #[error("Chart {0} declared more than once")]
    DuplicateChart(ChartId),

    /// A chart consumes its own interaction event
    #[error("Chart {0} depends on its own event")]
    SelfDependency(ChartId),

    /// A range event would be re-derived through an intermediate chart
    #[error("Chart {chart} reads {input} from {emitter}, which itself depends on an emitted event")]
    ChainedEvent {
        chart: ChartId,
        input: Input,
        emitter: ChartId,
    },
}

pub type DashboardResult<T> = Result<T, DashboardError>;
