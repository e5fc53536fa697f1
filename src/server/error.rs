//! Server error type and HTTP status code mapping.

use crate::models::ErrorResponse;
use crate::proxy::FetchError;
use crate::storage::SaveError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Error returned by request handlers.
///
/// Every variant renders as an [`ErrorResponse`] body, so the UI only has one
/// shape to read.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Proxy call failed (400 for a missing URL, 502 for upstream failures)
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Saving a response failed (400 for invalid JSON, 500 for I/O)
    #[error(transparent)]
    Save(#[from] SaveError),

    /// Malformed request body (400)
    #[error("Validation Error: {0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Fetch(FetchError::MissingUrl) => StatusCode::BAD_REQUEST,
            ApiError::Fetch(_) => StatusCode::BAD_GATEWAY,
            ApiError::Save(SaveError::InvalidJson(_)) => StatusCode::BAD_REQUEST,
            ApiError::Save(SaveError::Io(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::Fetch(FetchError::MissingUrl) => ErrorResponse::new("API URL is required."),
            ApiError::Fetch(err) => {
                ErrorResponse::new("An error occurred while processing the API request.")
                    .with_details(err.to_string())
                    .with_status(err.upstream_status())
            }
            ApiError::Save(SaveError::InvalidJson(err)) => {
                ErrorResponse::new("The submitted content is not valid JSON.")
                    .with_details(err.to_string())
            }
            ApiError::Save(SaveError::Io(err)) => {
                ErrorResponse::new("Failed to save the JSON file.").with_details(err.to_string())
            }
            ApiError::BadRequest(msg) => ErrorResponse::new(msg.clone()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}
