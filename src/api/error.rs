use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Failures surfaced by request handlers. Every variant is a server-side
/// fault; request input is never rejected.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Error response that gets serialized to JSON
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            ApiError::Storage(_) => "InternalServerError",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "API error occurred");

        let error_response = ErrorResponse {
            error: self.error_type().to_string(),
            message: "An internal error occurred".to_string(),
        };

        (self.status_code(), Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_date_error() -> ApiError {
        let source = chrono::NaiveDate::parse_from_str("bogus", "%Y-%m-%d").unwrap_err();
        ApiError::from(StoreError::InvalidDate {
            date: "bogus".to_string(),
            source,
        })
    }

    #[test]
    fn test_storage_error_is_internal() {
        let error = invalid_date_error();
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.error_type(), "InternalServerError");
    }

    #[test]
    fn test_error_display() {
        let error = invalid_date_error();
        assert!(error.to_string().starts_with("Storage error: Invalid observation date 'bogus'"));
    }

    #[test]
    fn test_response_hides_cause() {
        let response = invalid_date_error().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
