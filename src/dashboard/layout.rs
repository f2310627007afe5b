//! Dashboard Layout
//!
//! The draggable grid arrangement and the control panels, described as data
//! so the browser shell only has to render what it is given.

use serde::Serialize;
use serde_json::{json, Value};

use super::dispatcher::Dispatcher;
use super::inputs::{ChartId, Input};
use crate::dataset::Measure;

pub const DASHBOARD_TITLE: &str = "Country comparison";

/// Number of columns of the widest breakpoint
pub const GRID_COLUMNS: u32 = 12;

/// Pixel height of one grid row
pub const GRID_ROW_HEIGHT: u32 = 30;

/// Position and size of one panel, in grid units
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridItem {
    /// Panel id
    pub i: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl GridItem {
    fn new(chart: ChartId, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            i: chart.panel_id(),
            x,
            y,
            w,
            h,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLayout {
    pub columns: u32,
    pub row_height: u32,
    /// Arrangement for the large breakpoint
    pub lg: Vec<GridItem>,
}

/// Default arrangement: time series top-left, top population top-right,
/// pie bottom-left, bubbles bottom-right
pub fn default_grid() -> GridLayout {
    GridLayout {
        columns: GRID_COLUMNS,
        row_height: GRID_ROW_HEIGHT,
        lg: vec![
            GridItem::new(ChartId::Bubble, 7, 10, 7, 13),
            GridItem::new(ChartId::MeasureVsYear, 0, 0, 7, 13),
            GridItem::new(ChartId::TopPopulation, 7, 0, 5, 13),
            GridItem::new(ChartId::PopulationPie, 0, 10, 5, 13),
        ],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    Dropdown,
    MultiSelect,
}

/// One control shown above a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlSpec {
    pub id: Input,
    pub label: String,
    pub kind: ControlKind,
    pub options: Vec<String>,
    pub value: Value,
    pub clearable: bool,
}

/// A grid panel: one chart with its controls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelSpec {
    pub id: String,
    pub chart: ChartId,
    pub controls: Vec<ControlSpec>,
}

/// Everything the browser shell needs to draw the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardDescriptor {
    pub title: String,
    pub grid: GridLayout,
    /// Panels in grid insertion order
    pub panels: Vec<PanelSpec>,
}

fn measure_options() -> Vec<String> {
    Measure::all().iter().map(|m| m.column().to_string()).collect()
}

fn measure_dropdown(id: Input, label: &str, value: Measure) -> ControlSpec {
    ControlSpec {
        id,
        label: label.to_string(),
        kind: ControlKind::Dropdown,
        options: measure_options(),
        value: json!(value.column()),
        clearable: false,
    }
}

/// Describe the dashboard for a session starting from the default inputs
pub fn describe(dispatcher: &Dispatcher) -> DashboardDescriptor {
    let defaults = dispatcher.default_inputs();

    let panels = ChartId::all()
        .iter()
        .map(|&chart| {
            let controls = match chart {
                ChartId::MeasureVsYear => vec![
                    ControlSpec {
                        id: Input::ActiveCountries,
                        label: "Active countries".to_string(),
                        kind: ControlKind::MultiSelect,
                        options: dispatcher.table().countries().to_vec(),
                        value: json!(defaults.active_countries),
                        clearable: true,
                    },
                    measure_dropdown(Input::TimeSeriesMeasure, "Measure", defaults.measure),
                ],
                ChartId::Bubble => vec![
                    measure_dropdown(Input::BubbleX, "X axis", defaults.bubble_x),
                    measure_dropdown(Input::BubbleY, "Y axis", defaults.bubble_y),
                    measure_dropdown(Input::BubbleSize, "Size", defaults.bubble_size),
                ],
                ChartId::TopPopulation | ChartId::PopulationPie => Vec::new(),
            };
            PanelSpec {
                id: chart.panel_id(),
                chart,
                controls,
            }
        })
        .collect();

    DashboardDescriptor {
        title: DASHBOARD_TITLE.to_string(),
        grid: default_grid(),
        panels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartSettings;
    use crate::dataset::fixtures::{sample_table, COUNTRIES};
    use std::sync::Arc;

    #[test]
    fn test_default_grid_positions() {
        let grid = default_grid();
        let find = |id: &str| grid.lg.iter().find(|item| item.i == id).unwrap().clone();

        assert_eq!(
            find("meas-vs-year-dash"),
            GridItem {
                i: "meas-vs-year-dash".to_string(),
                x: 0,
                y: 0,
                w: 7,
                h: 13,
            }
        );
        assert_eq!(
            find("top-pop-dash"),
            GridItem {
                i: "top-pop-dash".to_string(),
                x: 7,
                y: 0,
                w: 5,
                h: 13,
            }
        );
        assert_eq!(
            find("pop-pie-dash"),
            GridItem {
                i: "pop-pie-dash".to_string(),
                x: 0,
                y: 10,
                w: 5,
                h: 13,
            }
        );
        assert_eq!(
            find("bubble-dash"),
            GridItem {
                i: "bubble-dash".to_string(),
                x: 7,
                y: 10,
                w: 7,
                h: 13,
            }
        );
    }

    #[test]
    fn test_descriptor_controls() {
        let dispatcher =
            Dispatcher::new(Arc::new(sample_table()), ChartSettings::default()).unwrap();
        let descriptor = describe(&dispatcher);

        assert_eq!(descriptor.title, DASHBOARD_TITLE);
        assert_eq!(descriptor.panels.len(), 4);

        let series_panel = &descriptor.panels[0];
        assert_eq!(series_panel.chart, ChartId::MeasureVsYear);
        let countries = &series_panel.controls[0];
        assert_eq!(countries.kind, ControlKind::MultiSelect);
        assert_eq!(countries.options.len(), COUNTRIES.len());
        assert_eq!(countries.value, json!(["United States", "China", "India"]));

        let bubble_panel = &descriptor.panels[1];
        let values: Vec<&Value> = bubble_panel.controls.iter().map(|c| &c.value).collect();
        assert_eq!(values, vec![&json!("gdpPercap"), &json!("lifeExp"), &json!("pop")]);
        assert!(bubble_panel.controls.iter().all(|c| !c.clearable));
    }

    #[test]
    fn test_descriptor_serializes_control_ids() {
        let dispatcher =
            Dispatcher::new(Arc::new(sample_table()), ChartSettings::default()).unwrap();
        let json = serde_json::to_value(describe(&dispatcher)).unwrap();
        assert_eq!(json["panels"][1]["controls"][0]["id"], "bubble-x");
        assert_eq!(json["panels"][0]["controls"][0]["kind"], "multi_select");
        assert_eq!(json["grid"]["columns"], 12);
    }
}
