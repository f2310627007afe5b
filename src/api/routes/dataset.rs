//! GET /api/v1/dataset - Overview of the loaded table

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::DatasetResponse;
use crate::api::state::AppState;

pub async fn get_dataset(State(state): State<Arc<AppState>>) -> Json<DatasetResponse> {
    let table = state.dispatcher.table();
    Json(DatasetResponse {
        summary: table.summary(),
        country_names: table.countries().to_vec(),
    })
}
