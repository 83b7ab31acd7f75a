use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use meridian_table::{TableParameters, TableRequest, TableResponse};

use crate::{error::ApiError, state::AppState};

pub async fn table_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TableRequest>,
) -> Result<Json<TableResponse>, ApiError> {
    let parameters = TableParameters::try_from(body)?;

    let response = tokio::task::spawn_blocking(move || state.table.handle_request(&parameters))
        .await
        .map_err(|err| ApiError::InternalServerError(err.to_string()))??;

    Ok(Json(response))
}
