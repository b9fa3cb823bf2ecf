//! Application error type and its HTTP mapping.
//!
//! Every client-facing failure becomes a status code plus a short, stable
//! plain-text message. Internal details are logged, never sent to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::utils::url_cipher::CipherError;

/// Message returned for integrity failures; the real cause only goes to the log.
const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing request input (400).
    #[error("{0}")]
    Validation(String),

    /// Unknown short code (404).
    #[error("{0}")]
    NotFound(String),

    /// Admission denied by the rate limiter (429).
    #[error("{0}")]
    TooManyRequests(String),

    /// Stored data could not be processed (500).
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn too_many_requests(message: impl Into<String>) -> Self {
        Self::TooManyRequests(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CipherError> for AppError {
    fn from(e: CipherError) -> Self {
        tracing::error!(error = %e, "Stored payload failed integrity processing");
        AppError::internal(INTERNAL_MESSAGE)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::too_many_requests("x").status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            AppError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_cipher_error_hides_details() {
        let err: AppError = CipherError::InvalidEncoding("odd length".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), INTERNAL_MESSAGE);
    }

    #[test]
    fn test_display_is_message() {
        let err = AppError::bad_request("URL parameter in query is required");
        assert_eq!(err.to_string(), "URL parameter in query is required");
    }
}
