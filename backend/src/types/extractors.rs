//! Custom extractors for request bodies and path parameters

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, StatusCode},
};
use serde::de::DeserializeOwned;

use crate::types::error::AppError;

/// JSON body extractor that ignores the request's `Content-Type`
///
/// API gateways do not always forward the header, so the body is parsed as JSON
/// whatever it claims to be. Malformed payloads become a `400` envelope.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|err| {
            tracing::warn!("Failed to read request body: {err}");
            AppError::new(StatusCode::BAD_REQUEST, "Invalid request body")
        })?;

        let payload = serde_json::from_slice(&bytes).map_err(|err| {
            tracing::warn!("Invalid JSON payload: {err}");
            AppError::new(StatusCode::BAD_REQUEST, "Invalid JSON payload")
        })?;

        Ok(Self(payload))
    }
}

/// Path parameter extractor whose rejection is a `400` envelope
///
/// Rejects ids that are not valid percent-encoded UTF-8.
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|err| {
                tracing::warn!("Invalid path parameter: {err}");
                AppError::new(StatusCode::BAD_REQUEST, "Invalid path parameter")
            })?;

        Ok(Self(value))
    }
}
