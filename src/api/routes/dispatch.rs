//! Dispatch Route
//!
//! POST /api/v1/dispatch - An input changed; rebuild every chart that
//! depends on it.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ChartsResponse, DispatchRequest};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::Input;

/// POST /api/v1/dispatch
///
/// # Request Body
///
/// ```json
/// {
///   "trigger": "meas-vs-year.relayoutData",
///   "inputs": {
///     "active_countries": ["China", "India"],
///     "zoom": {"xaxis.range[0]": 1990, "xaxis.range[1]": 2000}
///   }
/// }
/// ```
pub async fn dispatch(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DispatchRequest>, JsonRejection>,
) -> ApiResult<Json<ChartsResponse>> {
    let Json(request) = payload?;
    let trigger: Input = request.trigger.parse()?;
    let inputs = state.dispatcher.inputs_from(request.inputs);

    Ok(Json(ChartsResponse {
        charts: state.dispatcher.dispatch(trigger, &inputs),
    }))
}
