//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::dashboard::DashboardError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Unknown chart or control, or an invalid dashboard graph
    #[error("Dashboard error: {0}")]
    Dashboard(#[from] DashboardError),

    /// Request body is not valid JSON for the endpoint
    #[error("Invalid request body: {0}")]
    Body(#[from] JsonRejection),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Dashboard(e) => match e {
                DashboardError::UnknownChart(_) => (StatusCode::NOT_FOUND, "CHART_NOT_FOUND"),
                DashboardError::UnknownInput(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_INPUT"),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, "DASHBOARD_ERROR"),
            },
            ApiError::Body(_) => (StatusCode::BAD_REQUEST, "INVALID_BODY"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        };

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "API error occurred"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                ApiError::Dashboard(DashboardError::UnknownChart("map".to_string())),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::Dashboard(DashboardError::UnknownInput("slider".to_string())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
