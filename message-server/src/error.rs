//! HTTP-facing errors and their status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use storage::StorageError;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid message id: {0}")]
    InvalidId(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::InvalidId(raw) => {
                warn!(id = %raw, "Rejected non-integer message id");
                (status, self.to_string()).into_response()
            }
            ApiError::Storage(e) => {
                error!(error = %e, "Storage operation failed");
                (status, "Internal server error").into_response()
            }
        }
    }
}
