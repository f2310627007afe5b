//! Measure-vs-Year Chart
//!
//! One line per selected country. Its x-axis zoom is the year range the
//! other three charts filter on.

use std::collections::{HashMap, HashSet};

use super::figure::{Axis, Figure, Layout, LineStyle, ScatterMode, ScatterTrace, Trace};
use super::palette::series_color;
use crate::dataset::{Measure, Table, YearRange};

pub const TIME_SERIES_TITLE: &str = "Measures by year";

/// Inputs of the time-series chart
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesParams {
    pub countries: Vec<String>,
    pub measure: Measure,
    /// Visible year window. Only set when rendering a pre-zoomed chart
    /// (the CLI); the dashboard leaves zoom to the browser.
    pub window: Option<YearRange>,
}

impl TimeSeriesParams {
    pub fn new(countries: Vec<String>, measure: Measure) -> Self {
        Self {
            countries,
            measure,
            window: None,
        }
    }
}

/// A single country's line
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub country: String,
    /// (year, value) sorted by year
    pub points: Vec<(i32, f64)>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeriesView {
    pub series: Vec<Series>,
}

impl TimeSeriesView {
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Restrict every series to the years inside `range`, dropping series
    /// left without points
    pub fn within(&self, range: YearRange) -> TimeSeriesView {
        let series = self
            .series
            .iter()
            .map(|s| Series {
                country: s.country.clone(),
                points: s
                    .points
                    .iter()
                    .copied()
                    .filter(|(year, _)| range.contains(*year))
                    .collect(),
            })
            .filter(|s| !s.points.is_empty())
            .collect();
        TimeSeriesView { series }
    }
}

/// Derive one series per distinct selected country present in the table,
/// in selection order
pub fn time_series_view(table: &Table, params: &TimeSeriesParams) -> TimeSeriesView {
    let mut grouped: HashMap<&str, Vec<(i32, f64)>> = HashMap::new();
    for row in table.for_countries(&params.countries) {
        grouped
            .entry(row.country.as_str())
            .or_default()
            .push((row.year, row.value(params.measure)));
    }

    let mut seen = HashSet::new();
    let series = params
        .countries
        .iter()
        .filter(|&country| seen.insert(country.as_str()))
        .filter_map(|country| {
            let mut points = grouped.remove(country.as_str())?;
            points.sort_by_key(|(year, _)| *year);
            Some(Series {
                country: country.clone(),
                points,
            })
        })
        .collect();

    let view = TimeSeriesView { series };
    match params.window {
        Some(window) => view.within(window),
        None => view,
    }
}

pub fn time_series_figure(view: &TimeSeriesView, params: &TimeSeriesParams) -> Figure {
    let measure = params.measure.column();
    let hovertemplate = format!(
        "<b>%{{fullData.name}}</b><br>year=%{{x}}<br>{}=%{{y}}<extra></extra>",
        measure
    );

    let traces = view.series.iter().enumerate().map(|(index, series)| {
        let mut trace = ScatterTrace::new(series.country.as_str(), ScatterMode::Lines);
        trace.x = series.points.iter().map(|(year, _)| *year as f64).collect();
        trace.y = series.points.iter().map(|(_, value)| *value).collect();
        trace.hovertemplate = Some(hovertemplate.clone());
        trace.line = Some(LineStyle {
            color: series_color(index).to_string(),
        });
        Trace::Scatter(trace)
    });

    let mut xaxis = Axis::titled("year");
    xaxis.range = params.window.map(|w| [w.from, w.to]);

    let mut layout = Layout::titled(TIME_SERIES_TITLE)
        .xaxis(xaxis)
        .yaxis(Axis::titled(measure))
        .legend("country");
    layout.uirevision = Some("time-series".to_string());

    Figure::new(layout).traces(traces)
}

pub fn build_time_series_chart(table: &Table, params: &TimeSeriesParams) -> Figure {
    time_series_figure(&time_series_view(table, params), params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::sample_table;

    fn countries(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_one_series_per_selected_country() {
        let table = sample_table();
        let params = TimeSeriesParams::new(
            countries(&["United States", "China", "India"]),
            Measure::Population,
        );
        let view = time_series_view(&table, &params);

        let names: Vec<&str> = view.series.iter().map(|s| s.country.as_str()).collect();
        assert_eq!(names, vec!["United States", "China", "India"]);

        let china = &view.series[1];
        let years: Vec<i32> = china.points.iter().map(|(y, _)| *y).collect();
        assert_eq!(years, vec![1997, 2000, 2001, 2002]);
    }

    #[test]
    fn test_duplicates_and_unknown_countries() {
        let table = sample_table();
        let params = TimeSeriesParams::new(
            countries(&["China", "Atlantis", "China"]),
            Measure::LifeExpectancy,
        );
        let figure = build_time_series_chart(&table, &params);
        assert_eq!(figure.data.len(), 1);
        assert_eq!(figure.data[0].name(), Some("China"));
    }

    #[test]
    fn test_empty_selection_has_no_series() {
        let table = sample_table();
        let params = TimeSeriesParams::new(Vec::new(), Measure::Population);
        let figure = build_time_series_chart(&table, &params);
        assert!(figure.data.is_empty());
        assert_eq!(
            figure.layout.title.as_ref().unwrap().text,
            TIME_SERIES_TITLE
        );
    }

    #[test]
    fn test_zoomed_window_scenario() {
        let table = sample_table();
        let mut params =
            TimeSeriesParams::new(countries(&["China", "India"]), Measure::Population);
        params.window = Some(YearRange::new(2000.0, 2002.0));

        let view = time_series_view(&table, &params);
        assert_eq!(view.len(), 2);
        for series in &view.series {
            let years: Vec<i32> = series.points.iter().map(|(y, _)| *y).collect();
            assert_eq!(years, vec![2000, 2001, 2002], "{}", series.country);
        }

        let figure = time_series_figure(&view, &params);
        assert_eq!(
            figure.layout.xaxis.as_ref().unwrap().range,
            Some([2000.0, 2002.0])
        );
    }

    #[test]
    fn test_within_drops_series_without_points() {
        let table = sample_table();
        let params = TimeSeriesParams::new(countries(&["China", "Japan"]), Measure::Population);
        let view = time_series_view(&table, &params).within(YearRange::new(2000.0, 2001.0));

        assert_eq!(view.len(), 1);
        assert_eq!(view.series[0].country, "China");
    }

    #[test]
    fn test_series_colored_independently() {
        let table = sample_table();
        let params = TimeSeriesParams::new(countries(&["China", "India"]), Measure::Population);
        let figure = build_time_series_chart(&table, &params);

        let colors: Vec<String> = figure
            .data
            .iter()
            .map(|trace| match trace {
                Trace::Scatter(t) => t.line.as_ref().unwrap().color.clone(),
                other => panic!("Expected scatter, got {:?}", other),
            })
            .collect();
        assert_ne!(colors[0], colors[1]);
    }
}
