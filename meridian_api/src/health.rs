use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use meridian_routing::facade::DataFacade;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    checksum: u32,
    nodes: usize,
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let network = state.table.facade();

    Json(HealthResponse {
        status: "ok",
        checksum: network.checksum(),
        nodes: network.node_count(),
    })
}
