//! Dependency Graph
//!
//! Explicit declaration of which inputs each chart is rebuilt from.
//!
//! ```text
//! dropdown-active-countries ─┐
//! dropdown-measure ──────────┴─▶ meas-vs-year ──(relayoutData)──┐
//!                                                               │
//! bubble-x, bubble-y, bubble-size ───────────────▶ bubble ◀─────┤
//!                                                  top-pop ◀────┤
//!                                                  pop-pie ◀────┘
//! ```
//!
//! Propagation is at most one hop: a chart that consumes an emitted event
//! may not itself feed another chart through an event.

use std::collections::HashSet;

use super::error::{DashboardError, DashboardResult};
use super::inputs::{ChartId, Input};

#[derive(Debug, Clone)]
pub struct DependencyGraph {
    edges: Vec<(ChartId, Vec<Input>)>,
}

impl DependencyGraph {
    /// Build and validate a graph from per-chart input lists
    pub fn new(edges: Vec<(ChartId, Vec<Input>)>) -> DashboardResult<Self> {
        let mut declared = HashSet::new();
        for (chart, _) in &edges {
            if !declared.insert(*chart) {
                return Err(DashboardError::DuplicateChart(*chart));
            }
        }

        let graph = Self { edges };
        graph.validate()?;
        Ok(graph)
    }

    /// The dashboard's wiring
    pub fn standard() -> DashboardResult<Self> {
        Self::new(vec![
            (
                ChartId::MeasureVsYear,
                vec![Input::ActiveCountries, Input::TimeSeriesMeasure],
            ),
            (
                ChartId::Bubble,
                vec![
                    Input::BubbleX,
                    Input::BubbleY,
                    Input::BubbleSize,
                    Input::TimeSeriesZoom,
                ],
            ),
            (ChartId::TopPopulation, vec![Input::TimeSeriesZoom]),
            (ChartId::PopulationPie, vec![Input::TimeSeriesZoom]),
        ])
    }

    fn validate(&self) -> DashboardResult<()> {
        for (chart, inputs) in &self.edges {
            for input in inputs {
                let Some(emitter) = input.emitter() else {
                    continue;
                };
                if emitter == *chart {
                    return Err(DashboardError::SelfDependency(*chart));
                }
                let chained = self
                    .inputs_of(emitter)
                    .iter()
                    .any(|upstream| upstream.emitter().is_some());
                if chained {
                    return Err(DashboardError::ChainedEvent {
                        chart: *chart,
                        input: *input,
                        emitter,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn charts(&self) -> impl Iterator<Item = ChartId> + '_ {
        self.edges.iter().map(|(chart, _)| *chart)
    }

    pub fn inputs_of(&self, chart: ChartId) -> &[Input] {
        self.edges
            .iter()
            .find(|(c, _)| *c == chart)
            .map(|(_, inputs)| inputs.as_slice())
            .unwrap_or(&[])
    }

    /// Charts to rebuild when `input` changes, in declaration order
    pub fn dependents(&self, input: Input) -> Vec<ChartId> {
        self.edges
            .iter()
            .filter(|(_, inputs)| inputs.contains(&input))
            .map(|(chart, _)| *chart)
            .collect()
    }
}
