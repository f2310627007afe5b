//! Bubble Chart
//!
//! One bubble per country at its most recent year inside the active range,
//! positioned by two measures, sized by a third and colored by continent.

use std::collections::BTreeMap;

use super::figure::{Axis, Figure, Layout, Marker, ScatterMode, ScatterTrace, Trace};
use super::palette::continent_color;
use crate::dataset::{Continent, Measure, Table, YearRange};

/// Inputs of the bubble chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleParams {
    pub x: Measure,
    pub y: Measure,
    pub size: Measure,
    pub range: Option<YearRange>,
}

impl Default for BubbleParams {
    fn default() -> Self {
        Self {
            x: Measure::GdpPerCapita,
            y: Measure::LifeExpectancy,
            size: Measure::Population,
            range: None,
        }
    }
}

/// A country's position in the bubble chart
#[derive(Debug, Clone, PartialEq)]
pub struct BubblePoint {
    pub country: String,
    pub continent: Continent,
    pub year: i32,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// Bubbles ordered by continent, then country
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BubbleView {
    pub points: Vec<BubblePoint>,
}

impl BubbleView {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn max_size(&self) -> f64 {
        self.points.iter().map(|p| p.size).fold(0.0, f64::max)
    }
}

/// Derive the latest-snapshot bubbles.
///
/// The output is sorted, so it does not depend on the table's row order.
pub fn bubble_view(table: &Table, params: &BubbleParams) -> BubbleView {
    let mut points: Vec<BubblePoint> = table
        .latest_snapshot(params.range)
        .into_iter()
        .map(|row| BubblePoint {
            country: row.country.clone(),
            continent: row.continent,
            year: row.year,
            x: row.value(params.x),
            y: row.value(params.y),
            size: row.value(params.size),
        })
        .collect();

    points.sort_by(|a, b| {
        a.continent
            .cmp(&b.continent)
            .then_with(|| a.country.cmp(&b.country))
    });

    BubbleView { points }
}

/// Area-mode scale factor so the largest bubble is `size_max` pixels across
pub fn size_ref(max_size: f64, size_max: f64) -> f64 {
    if max_size > 0.0 && size_max > 0.0 {
        2.0 * max_size / (size_max * size_max)
    } else {
        1.0
    }
}

pub fn bubble_figure(view: &BubbleView, params: &BubbleParams, size_max: f64) -> Figure {
    let sizeref = size_ref(view.max_size(), size_max);

    let mut by_continent: BTreeMap<Continent, Vec<&BubblePoint>> = BTreeMap::new();
    for point in &view.points {
        by_continent.entry(point.continent).or_default().push(point);
    }

    let hovertemplate = format!(
        concat!(
            "<b>%{{text}}</b><br>year=%{{customdata}}<br>",
            "{}=%{{x}}<br>{}=%{{y}}<br>{}=%{{marker.size}}<extra></extra>",
        ),
        params.x, params.y, params.size
    );

    let traces = by_continent.into_iter().map(|(continent, points)| {
        let mut trace = ScatterTrace::new(continent.as_str(), ScatterMode::Markers);
        trace.x = points.iter().map(|p| p.x).collect();
        trace.y = points.iter().map(|p| p.y).collect();
        trace.text = Some(points.iter().map(|p| p.country.clone()).collect());
        trace.customdata = Some(points.iter().map(|p| p.year).collect());
        trace.hovertemplate = Some(hovertemplate.clone());
        trace.legendgroup = Some(continent.as_str().to_string());
        trace.marker = Some(Marker {
            color: continent_color(continent).to_string(),
            size: Some(points.iter().map(|p| p.size).collect()),
            sizemode: Some("area".to_string()),
            sizeref: Some(sizeref),
        });
        Trace::Scatter(trace)
    });

    let layout = Layout::default()
        .xaxis(Axis::titled(params.x.column()))
        .yaxis(Axis::titled(params.y.column()))
        .legend("continent");

    Figure::new(layout).traces(traces)
}

pub fn build_bubble_chart(table: &Table, params: &BubbleParams, size_max: f64) -> Figure {
    bubble_figure(&bubble_view(table, params), params, size_max)
}
