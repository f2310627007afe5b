//! GET /api/v1/dashboard - Grid layout, controls and their defaults

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::dashboard::{describe, DashboardDescriptor};

pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardDescriptor> {
    Json(describe(&state.dispatcher))
}
