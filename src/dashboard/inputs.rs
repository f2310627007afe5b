//! Controls, charts and the values a session sends with every event

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::error::DashboardError;
use crate::dataset::{Measure, YearRange};

/// The four chart panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChartId {
    #[serde(rename = "bubble")]
    Bubble,
    #[serde(rename = "meas-vs-year")]
    MeasureVsYear,
    #[serde(rename = "top-pop")]
    TopPopulation,
    #[serde(rename = "pop-pie")]
    PopulationPie,
}

impl ChartId {
    pub fn all() -> &'static [ChartId] {
        &[
            ChartId::MeasureVsYear,
            ChartId::Bubble,
            ChartId::TopPopulation,
            ChartId::PopulationPie,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartId::Bubble => "bubble",
            ChartId::MeasureVsYear => "meas-vs-year",
            ChartId::TopPopulation => "top-pop",
            ChartId::PopulationPie => "pop-pie",
        }
    }

    /// Id of the grid panel that hosts the chart
    pub fn panel_id(&self) -> String {
        format!("{}-dash", self.as_str())
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartId {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartId::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownChart(s.to_string()))
    }
}

/// Everything a chart can depend on: UI controls and emitted chart events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    #[serde(rename = "bubble-x")]
    BubbleX,
    #[serde(rename = "bubble-y")]
    BubbleY,
    #[serde(rename = "bubble-size")]
    BubbleSize,
    #[serde(rename = "dropdown-active-countries")]
    ActiveCountries,
    #[serde(rename = "dropdown-measure")]
    TimeSeriesMeasure,
    /// Relayout (zoom) event of the time-series chart
    #[serde(rename = "meas-vs-year.relayoutData")]
    TimeSeriesZoom,
}

impl Input {
    pub fn all() -> &'static [Input] {
        &[
            Input::BubbleX,
            Input::BubbleY,
            Input::BubbleSize,
            Input::ActiveCountries,
            Input::TimeSeriesMeasure,
            Input::TimeSeriesZoom,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Input::BubbleX => "bubble-x",
            Input::BubbleY => "bubble-y",
            Input::BubbleSize => "bubble-size",
            Input::ActiveCountries => "dropdown-active-countries",
            Input::TimeSeriesMeasure => "dropdown-measure",
            Input::TimeSeriesZoom => "meas-vs-year.relayoutData",
        }
    }

    /// The chart that emits this input, for chart interaction events
    pub fn emitter(&self) -> Option<ChartId> {
        match self {
            Input::TimeSeriesZoom => Some(ChartId::MeasureVsYear),
            _ => None,
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Input {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Input::all()
            .iter()
            .copied()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownInput(s.to_string()))
    }
}

pub fn default_countries() -> Vec<String> {
    vec![
        "United States".to_string(),
        "China".to_string(),
        "India".to_string(),
    ]
}

/// Current value of every input in a browser session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardInputs {
    pub bubble_x: Measure,
    pub bubble_y: Measure,
    pub bubble_size: Measure,
    pub active_countries: Vec<String>,
    pub measure: Measure,
    /// Raw relayout payload of the time-series chart
    pub zoom: Option<Value>,
}

impl Default for DashboardInputs {
    fn default() -> Self {
        Self {
            bubble_x: Measure::GdpPerCapita,
            bubble_y: Measure::LifeExpectancy,
            bubble_size: Measure::Population,
            active_countries: default_countries(),
            measure: Measure::Population,
            zoom: None,
        }
    }
}

impl DashboardInputs {
    /// Year range selected on the time-series chart, if any
    pub fn year_range(&self) -> Option<YearRange> {
        self.zoom.as_ref().and_then(year_range_from_relayout)
    }
}

/// Inputs as a client sends them. Absent fields keep the session defaults.
///
/// The server keeps no session state, so every event carries these.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PartialInputs {
    #[serde(default)]
    pub bubble_x: Option<Measure>,
    #[serde(default)]
    pub bubble_y: Option<Measure>,
    #[serde(default)]
    pub bubble_size: Option<Measure>,
    /// `null` is a cleared multi-select, not a missing field
    #[serde(default, deserialize_with = "null_as_empty")]
    pub active_countries: Option<Vec<String>>,
    #[serde(default)]
    pub measure: Option<Measure>,
    #[serde(default)]
    pub zoom: Option<Value>,
}

impl PartialInputs {
    /// Fill the missing fields from `base`
    pub fn over(self, base: DashboardInputs) -> DashboardInputs {
        DashboardInputs {
            bubble_x: self.bubble_x.unwrap_or(base.bubble_x),
            bubble_y: self.bubble_y.unwrap_or(base.bubble_y),
            bubble_size: self.bubble_size.unwrap_or(base.bubble_size),
            active_countries: self.active_countries.unwrap_or(base.active_countries),
            measure: self.measure.unwrap_or(base.measure),
            zoom: self.zoom.or(base.zoom),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(
        Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default(),
    ))
}

/// Extract the x-axis range from a plotly relayout payload.
///
/// Reads `xaxis.range[0]` / `xaxis.range[1]`, or an `xaxis.range` pair.
/// Anything else (autorange reset, a single bound, non-numeric values)
/// yields `None`, meaning no filter.
pub fn year_range_from_relayout(payload: &Value) -> Option<YearRange> {
    let object = payload.as_object()?;

    let (from, to) = match object.get("xaxis.range") {
        Some(Value::Array(pair)) if pair.len() == 2 => (as_bound(&pair[0]), as_bound(&pair[1])),
        _ => (
            object.get("xaxis.range[0]").and_then(as_bound),
            object.get("xaxis.range[1]").and_then(as_bound),
        ),
    };

    YearRange::from_bounds(from, to)
}

fn as_bound(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_relayout_range_keys() {
        let payload = json!({"xaxis.range[0]": 1991.4, "xaxis.range[1]": 2003.9});
        let range = year_range_from_relayout(&payload).unwrap();
        assert_eq!(range, YearRange::new(1991.4, 2003.9));
    }

    #[test]
    fn test_relayout_range_array_and_strings() {
        let payload = json!({"xaxis.range": ["1990", 2000]});
        assert_eq!(
            year_range_from_relayout(&payload),
            Some(YearRange::new(1990.0, 2000.0))
        );
    }

    #[test]
    fn test_relayout_without_range_is_no_filter() {
        assert_eq!(year_range_from_relayout(&json!(null)), None);
        assert_eq!(year_range_from_relayout(&json!({})), None);
        assert_eq!(
            year_range_from_relayout(&json!({"xaxis.autorange": true})),
            None
        );
        assert_eq!(
            year_range_from_relayout(&json!({"xaxis.range[0]": 1990})),
            None
        );
        assert_eq!(
            year_range_from_relayout(&json!({"xaxis.range[1]": 2000})),
            None
        );
        assert_eq!(
            year_range_from_relayout(&json!({"xaxis.range[0]": "soon", "xaxis.range[1]": 2000})),
            None
        );
        assert_eq!(year_range_from_relayout(&json!({"autosize": true})), None);
    }

    fn japan_defaults() -> DashboardInputs {
        DashboardInputs {
            active_countries: vec!["Japan".to_string()],
            ..DashboardInputs::default()
        }
    }

    #[test]
    fn test_partial_inputs_keep_base_defaults() {
        let partial: PartialInputs = serde_json::from_str(r#"{"bubble_x": "pop"}"#).unwrap();
        let inputs = partial.over(japan_defaults());

        assert_eq!(inputs.bubble_x, Measure::Population);
        assert_eq!(inputs.bubble_y, Measure::LifeExpectancy);
        assert_eq!(inputs.active_countries, vec!["Japan".to_string()]);
        assert_eq!(inputs.year_range(), None);
    }

    #[test]
    fn test_partial_inputs_null_countries_clear_selection() {
        let partial: PartialInputs =
            serde_json::from_str(r#"{"active_countries": null}"#).unwrap();
        assert_eq!(partial.active_countries, Some(Vec::new()));
        assert!(partial.over(japan_defaults()).active_countries.is_empty());
    }

    #[test]
    fn test_partial_inputs_override_every_field() {
        let partial: PartialInputs = serde_json::from_str(
            r#"{
                "bubble_y": "gdpPercap",
                "bubble_size": "lifeExp",
                "active_countries": ["India"],
                "measure": "lifeExp",
                "zoom": {"xaxis.range[0]": 1990, "xaxis.range[1]": 2000}
            }"#,
        )
        .unwrap();
        let inputs = partial.over(japan_defaults());

        assert_eq!(inputs.bubble_x, Measure::GdpPerCapita);
        assert_eq!(inputs.bubble_y, Measure::GdpPerCapita);
        assert_eq!(inputs.bubble_size, Measure::LifeExpectancy);
        assert_eq!(inputs.active_countries, vec!["India".to_string()]);
        assert_eq!(inputs.measure, Measure::LifeExpectancy);
        assert_eq!(inputs.year_range(), Some(YearRange::new(1990.0, 2000.0)));
    }

    #[test]
    fn test_ids_round_trip_through_strings() {
        for chart in ChartId::all() {
            assert_eq!(chart.as_str().parse::<ChartId>().unwrap(), *chart);
        }
        for input in Input::all() {
            assert_eq!(input.as_str().parse::<Input>().unwrap(), *input);
        }
        assert_eq!(
            "scatter".parse::<ChartId>(),
            Err(DashboardError::UnknownChart("scatter".to_string()))
        );
        assert_eq!(ChartId::TopPopulation.panel_id(), "top-pop-dash");
    }
}
