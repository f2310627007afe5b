//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::charts::Figure;
use crate::dashboard::{ChartId, ChartUpdate, PartialInputs};
use crate::dataset::TableSummary;

// ============================================
// CHART DTOs
// ============================================

/// Input-change event from a browser session
#[derive(Debug, Deserialize)]
pub struct DispatchRequest {
    /// Id of the control or chart event that changed
    pub trigger: String,
    /// Inputs after the change; missing ones take the session defaults
    #[serde(default)]
    pub inputs: PartialInputs,
}

/// Figures returned for a dispatch or a full render
#[derive(Debug, Serialize)]
pub struct ChartsResponse {
    pub charts: Vec<ChartUpdate>,
}

/// Single figure response
#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub chart: ChartId,
    pub figure: Figure,
}

// ============================================
// DATASET DTOs
// ============================================

#[derive(Debug, Serialize)]
pub struct DatasetResponse {
    #[serde(flatten)]
    pub summary: TableSummary,
    /// Distinct countries in table order
    pub country_names: Vec<String>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "unhealthy"
    pub status: String,
    /// Dataset status: "ok" or "empty"
    pub dataset: String,
    /// Rows in the loaded table
    pub rows: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Measure;

    #[test]
    fn test_dispatch_request_without_inputs() {
        let request: DispatchRequest =
            serde_json::from_str(r#"{"trigger": "bubble-x"}"#).unwrap();
        assert_eq!(request.trigger, "bubble-x");
        assert_eq!(request.inputs, PartialInputs::default());
    }

    #[test]
    fn test_dispatch_request_with_zoom() {
        let request: DispatchRequest = serde_json::from_str(
            r#"{
                "trigger": "meas-vs-year.relayoutData",
                "inputs": {
                    "measure": "lifeExp",
                    "active_countries": null,
                    "zoom": {"xaxis.range[0]": "1990", "xaxis.range[1]": "2000"}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(request.inputs.measure, Some(Measure::LifeExpectancy));
        assert_eq!(request.inputs.active_countries, Some(vec![]));
        assert!(request.inputs.zoom.is_some());
        assert!(request.inputs.bubble_x.is_none());
    }
}
