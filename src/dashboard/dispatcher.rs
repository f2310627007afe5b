//! Event Dispatcher
//!
//! Turns an input change into fresh figures for every dependent chart by
//! calling the chart builders directly against the shared table.

use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use super::error::DashboardResult;
use super::graph::DependencyGraph;
use super::inputs::{ChartId, DashboardInputs, Input, PartialInputs};
use crate::charts::{
    build_bubble_chart, build_proportion_chart, build_time_series_chart,
    build_top_population_chart, BubbleParams, ChartSettings, Figure, TimeSeriesParams,
};
use crate::dataset::Table;

/// A replacement figure for one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartUpdate {
    pub chart: ChartId,
    pub figure: Figure,
}

/// Stateless event dispatcher shared by all sessions
#[derive(Debug, Clone)]
pub struct Dispatcher {
    table: Arc<Table>,
    graph: DependencyGraph,
    settings: ChartSettings,
    default_countries: Vec<String>,
}

impl Dispatcher {
    /// Dispatcher over the standard wiring, validated here
    pub fn new(table: Arc<Table>, settings: ChartSettings) -> DashboardResult<Self> {
        Ok(Self::with_graph(table, settings, DependencyGraph::standard()?))
    }

    /// Dispatcher over an already validated graph
    pub fn with_graph(
        table: Arc<Table>,
        settings: ChartSettings,
        graph: DependencyGraph,
    ) -> Self {
        Self {
            table,
            graph,
            settings,
            default_countries: super::inputs::default_countries(),
        }
    }

    /// Override the countries selected when a session starts
    pub fn with_default_countries(mut self, countries: Vec<String>) -> Self {
        self.default_countries = countries;
        self
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    /// Inputs of a freshly opened dashboard
    pub fn default_inputs(&self) -> DashboardInputs {
        DashboardInputs {
            active_countries: self.default_countries.clone(),
            ..DashboardInputs::default()
        }
    }

    /// Complete a client's inputs with this dashboard's defaults
    pub fn inputs_from(&self, partial: PartialInputs) -> DashboardInputs {
        partial.over(self.default_inputs())
    }

    /// Build one chart from the current inputs
    pub fn render(&self, chart: ChartId, inputs: &DashboardInputs) -> Figure {
        let table = self.table.as_ref();
        match chart {
            ChartId::Bubble => {
                let params = BubbleParams {
                    x: inputs.bubble_x,
                    y: inputs.bubble_y,
                    size: inputs.bubble_size,
                    range: inputs.year_range(),
                };
                build_bubble_chart(table, &params, self.settings.bubble_size_max)
            }
            ChartId::MeasureVsYear => {
                let params =
                    TimeSeriesParams::new(inputs.active_countries.clone(), inputs.measure);
                build_time_series_chart(table, &params)
            }
            ChartId::TopPopulation => {
                build_top_population_chart(table, inputs.year_range(), self.settings.top_n)
            }
            ChartId::PopulationPie => {
                build_proportion_chart(table, inputs.year_range(), self.settings.pie_scope)
            }
        }
    }

    /// Build every chart, for the initial page load
    pub fn render_all(&self, inputs: &DashboardInputs) -> Vec<ChartUpdate> {
        self.graph
            .charts()
            .map(|chart| ChartUpdate {
                chart,
                figure: self.render(chart, inputs),
            })
            .collect()
    }

    /// Rebuild the charts that depend on `changed`
    pub fn dispatch(&self, changed: Input, inputs: &DashboardInputs) -> Vec<ChartUpdate> {
        let started = Instant::now();

        let updates: Vec<ChartUpdate> = self
            .graph
            .dependents(changed)
            .into_iter()
            .map(|chart| ChartUpdate {
                chart,
                figure: self.render(chart, inputs),
            })
            .collect();

        tracing::debug!(
            input = %changed,
            charts = updates.len(),
            year_range = ?inputs.year_range(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "Dispatched input change"
        );

        updates
    }
}
