use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use meridian_table::TableError;
use serde_json::json;
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl From<TableError> for ApiError {
    fn from(error: TableError) -> Self {
        match error.status_code() {
            500 => ApiError::InternalServerError(error.to_string()),
            _ => ApiError::BadRequest(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(message) => {
                error!("{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };

        (status, Json(json!({ "status": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_errors_map_to_status() {
        let response = ApiError::from(TableError::AmbiguousMode).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::from(TableError::EngineUnavailable).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::from(TableError::CorruptSnapshot { index: 3 }).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
