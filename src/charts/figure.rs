//! Plotly figure types
//!
//! A `Figure` is a declarative description of one chart in the shape
//! plotly.js expects (`{data: [...traces], layout: {...}}`). Figures are
//! rebuilt from scratch on every input change and never patched.

use serde::Serialize;

/// A complete chart: traces plus layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(layout: Layout) -> Self {
        Self {
            data: Vec::new(),
            layout,
        }
    }

    pub fn trace(mut self, trace: Trace) -> Self {
        self.data.push(trace);
        self
    }

    pub fn traces(mut self, traces: impl IntoIterator<Item = Trace>) -> Self {
        self.data.extend(traces);
        self
    }

    /// Total number of plotted marks (points, bars or slices) across traces
    pub fn mark_count(&self) -> usize {
        self.data.iter().map(Trace::len).sum()
    }
}

/// One plotly trace
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(ScatterTrace),
    Bar(BarTrace),
    Pie(PieTrace),
}

impl Trace {
    pub fn len(&self) -> usize {
        match self {
            Trace::Scatter(t) => t.x.len(),
            Trace::Bar(t) => t.x.len(),
            Trace::Pie(t) => t.values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Trace::Scatter(t) => Some(t.name.as_str()),
            Trace::Bar(t) => t.name.as_deref(),
            Trace::Pie(_) => None,
        }
    }
}

/// How scatter points are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScatterMode {
    Markers,
    Lines,
}

/// Scatter or line trace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub name: String,
    pub mode: ScatterMode,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Per-point hover label (country name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    /// Per-point extra hover data (year)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customdata: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legendgroup: Option<String>,
}

impl ScatterTrace {
    pub fn new(name: impl Into<String>, mode: ScatterMode) -> Self {
        Self {
            name: name.into(),
            mode,
            x: Vec::new(),
            y: Vec::new(),
            text: None,
            customdata: None,
            hovertemplate: None,
            marker: None,
            line: None,
            legendgroup: None,
        }
    }
}

/// Horizontal or vertical bar trace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `"h"` for horizontal bars
    pub orientation: String,
    pub x: Vec<f64>,
    pub y: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customdata: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

/// Pie or donut trace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Fraction of the radius cut out of the center
    pub hole: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<PieMarker>,
}

/// Marker styling for scatter and bar traces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
    /// Per-point marker sizes, in data units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizemode: Option<String>,
    /// Divisor that maps data sizes to pixel area
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizeref: Option<f64>,
}

impl Marker {
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            size: None,
            sizemode: None,
            sizeref: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieMarker {
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
}

/// Figure layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    /// Keeps user zoom and legend state across re-renders while unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uirevision: Option<String>,
    pub autosize: bool,
}

impl Layout {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(Text::new(title)),
            ..Self::default()
        }
    }

    pub fn xaxis(mut self, axis: Axis) -> Self {
        self.xaxis = Some(axis);
        self
    }

    pub fn yaxis(mut self, axis: Axis) -> Self {
        self.yaxis = Some(axis);
        self
    }

    pub fn legend(mut self, title: impl Into<String>) -> Self {
        self.legend = Some(Legend {
            title: Text::new(title),
        });
        self
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            title: None,
            xaxis: None,
            yaxis: None,
            legend: None,
            uirevision: None,
            autosize: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Text,
    /// Explicit visible window; `None` lets plotly autorange
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

impl Axis {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Text::new(title),
            range: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_serializes_with_type_tag() {
        let mut trace = ScatterTrace::new("Asia", ScatterMode::Markers);
        trace.x = vec![1.0];
        trace.y = vec![2.0];

        let json = serde_json::to_value(Trace::Scatter(trace)).unwrap();
        assert_eq!(json["type"], "scatter");
        assert_eq!(json["mode"], "markers");
        assert_eq!(json["name"], "Asia");
        assert!(json.get("marker").is_none());
    }

    #[test]
    fn test_pie_serialization() {
        let trace = Trace::Pie(PieTrace {
            labels: vec!["Asia".to_string()],
            values: vec![10.0],
            hole: 0.3,
            hovertemplate: None,
            marker: None,
        });
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["type"], "pie");
        assert_eq!(json["hole"], 0.3);
    }

    #[test]
    fn test_layout_builder() {
        let layout = Layout::titled("Chart")
            .xaxis(Axis::titled("year"))
            .legend("country");
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["title"]["text"], "Chart");
        assert_eq!(json["xaxis"]["title"]["text"], "year");
        assert_eq!(json["legend"]["title"]["text"], "country");
        assert_eq!(json["autosize"], true);
        assert!(json.get("yaxis").is_none());
    }

    #[test]
    fn test_mark_count() {
        let figure = Figure::new(Layout::default()).trace(Trace::Bar(BarTrace {
            name: None,
            orientation: "h".to_string(),
            x: vec![1.0, 2.0],
            y: vec!["a".to_string(), "b".to_string()],
            customdata: None,
            hovertemplate: None,
            marker: None,
        }));
        assert_eq!(figure.mark_count(), 2);
    }
}
