//! Uniform response shaping
//!
//! Every response leaves the server with the same fixed header set and a JSON body:
//! either the resource itself or a [`Message`] envelope.

use axum::{
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Methods advertised in `Access-Control-Allow-Methods`
pub const ALLOWED_METHODS: &str = "OPTIONS, POST, GET, PUT, DELETE";

/// The fixed headers attached to every response
#[must_use]
pub fn fixed_headers() -> [(HeaderName, HeaderValue); 4] {
    [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("*"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ),
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ),
    ]
}

/// `{ "message": ... }` envelope for non-resource responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Human-readable message
    pub message: String,
}

impl Message {
    /// Create a new envelope
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A JSON response with an explicit status and the fixed header set
#[derive(Debug)]
pub struct ApiResponse<T> {
    status: StatusCode,
    body: T,
}

impl<T> ApiResponse<T> {
    /// `200 OK` carrying `body`
    pub const fn ok(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    /// Response with an arbitrary status
    pub const fn with_status(status: StatusCode, body: T) -> Self {
        Self { status, body }
    }
}

impl ApiResponse<Message> {
    /// `200 OK` carrying a message envelope
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::ok(Message::new(message))
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, fixed_headers(), Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serializes_lowercase_key() {
        let json = serde_json::to_value(Message::new("Book deleted!")).unwrap();

        assert_eq!(json, serde_json::json!({ "message": "Book deleted!" }));
    }

    #[test]
    fn test_response_carries_fixed_headers() {
        let response =
            ApiResponse::with_status(StatusCode::NOT_FOUND, Message::new("Book Not Found"))
                .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-headers"], "*");
        assert_eq!(
            headers["access-control-allow-methods"],
            "OPTIONS, POST, GET, PUT, DELETE"
        );
        assert_eq!(headers["content-type"], "application/json");
        // Json must not append a second content type
        assert_eq!(headers.get_all("content-type").iter().count(), 1);
    }
}
