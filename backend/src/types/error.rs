//! Universal error handling for the API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use book_storage::book::BookStorageError;

use super::response::{ApiResponse, Message};

/// Application error rendered as a `{ "message": ... }` envelope
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: &'static str,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub const fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }

    /// `404 NOT_FOUND` with the given message
    #[must_use]
    pub const fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// `500 INTERNAL_SERVER_ERROR`
    #[must_use]
    pub const fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    /// HTTP status of this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Message sent to the client
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error based on status code
        match self.status.as_u16() {
            400..=499 => tracing::warn!("Client error: {} - {}", self.status, self.message),
            500..=599 => tracing::error!("Server error: {} - {}", self.status, self.message),
            _ => {}
        }

        ApiResponse::with_status(self.status, Message::new(self.message)).into_response()
    }
}

/// Convert storage errors to application errors
impl From<BookStorageError> for AppError {
    fn from(err: BookStorageError) -> Self {
        match &err {
            BookStorageError::MissingId => {
                tracing::warn!("Rejected book without id");
                Self::new(StatusCode::BAD_REQUEST, "Book id is required")
            }
            BookStorageError::SerializationError(msg) => {
                tracing::error!("Stored book could not be decoded: {msg}");
                Self::internal()
            }
            BookStorageError::DynamoDbPutError(_)
            | BookStorageError::DynamoDbGetError(_)
            | BookStorageError::DynamoDbScanError(_)
            | BookStorageError::DynamoDbDeleteError(_) => {
                tracing::error!("DynamoDB error: {err}");
                Self::internal()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_id_is_bad_request() {
        let err = AppError::from(BookStorageError::MissingId);

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Book id is required");
    }

    #[test]
    fn test_serialization_error_is_internal() {
        let err = AppError::from(BookStorageError::SerializationError(
            "invalid type: string, expected f64".to_string(),
        ));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Internal server error");
    }

    #[test]
    fn test_into_response_uses_envelope_status() {
        let response = AppError::not_found("Book Not Found").into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }
}
