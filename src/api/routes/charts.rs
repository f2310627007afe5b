//! Chart Routes
//!
//! - GET /api/v1/charts - All four figures for the default inputs
//! - POST /api/v1/charts/:chart - One figure for the supplied inputs

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ChartResponse, ChartsResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::{ChartId, PartialInputs};

/// GET /api/v1/charts
///
/// Initial page load: every chart built from a fresh session's inputs.
pub async fn all_charts(State(state): State<Arc<AppState>>) -> Json<ChartsResponse> {
    let inputs = state.dispatcher.default_inputs();
    Json(ChartsResponse {
        charts: state.dispatcher.render_all(&inputs),
    })
}

/// POST /api/v1/charts/:chart
///
/// Inputs missing from the body take the session defaults.
pub async fn render_chart(
    State(state): State<Arc<AppState>>,
    Path(chart): Path<String>,
    payload: Result<Json<PartialInputs>, JsonRejection>,
) -> ApiResult<Json<ChartResponse>> {
    let chart: ChartId = chart.parse()?;
    let Json(partial) = payload?;
    let inputs = state.dispatcher.inputs_from(partial);

    Ok(Json(ChartResponse {
        chart,
        figure: state.dispatcher.render(chart, &inputs),
    }))
}
