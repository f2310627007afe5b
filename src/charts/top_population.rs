//! Top Population Chart
//!
//! Horizontal bars for the most populous countries at their latest year
//! inside the active range.

use std::cmp::Reverse;

use super::figure::{Axis, BarTrace, Figure, Layout, Marker, Trace};
use super::palette::series_color;
use crate::dataset::{Continent, Table, YearRange};

pub const DEFAULT_TOP_N: usize = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedCountry {
    pub country: String,
    pub continent: Continent,
    pub year: i32,
    pub population: u64,
}

/// Ranked countries in display order: ascending population, so the largest
/// bar is the last one and plotly draws it at the top
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TopPopulationView {
    pub ranked: Vec<RankedCountry>,
}

impl TopPopulationView {
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Countries from most to least populous
    pub fn descending(&self) -> impl Iterator<Item = &RankedCountry> {
        self.ranked.iter().rev()
    }
}

pub fn top_population_view(table: &Table, range: Option<YearRange>, n: usize) -> TopPopulationView {
    let mut snapshot = table.latest_snapshot(range);
    snapshot.sort_by_key(|row| Reverse(row.population));
    snapshot.truncate(n);

    let ranked = snapshot
        .into_iter()
        .rev()
        .map(|row| RankedCountry {
            country: row.country.clone(),
            continent: row.continent,
            year: row.year,
            population: row.population,
        })
        .collect();

    TopPopulationView { ranked }
}

pub fn top_population_figure(view: &TopPopulationView, n: usize) -> Figure {
    let bars = BarTrace {
        name: None,
        orientation: "h".to_string(),
        x: view.ranked.iter().map(|r| r.population as f64).collect(),
        y: view.ranked.iter().map(|r| r.country.clone()).collect(),
        customdata: Some(view.ranked.iter().map(|r| r.year).collect()),
        hovertemplate: Some(
            "<b>%{y}</b><br>pop=%{x}<br>year=%{customdata}<extra></extra>".to_string(),
        ),
        marker: Some(Marker::color(series_color(0))),
    };

    let layout = Layout::titled(format!("Top {} countries by population", n))
        .xaxis(Axis::titled("pop"))
        .yaxis(Axis::titled("country"));

    Figure::new(layout).trace(Trace::Bar(bars))
}

pub fn build_top_population_chart(table: &Table, range: Option<YearRange>, n: usize) -> Figure {
    top_population_figure(&top_population_view(table, range, n), n)
}
