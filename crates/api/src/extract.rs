//! Request body extraction that never rejects.

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// JSON body extractor that falls back to `T::default()`.
///
/// Unlike [`axum::Json`], a missing content type, an unreadable body or a
/// decode error does not reject the request. The failure is logged and the
/// handler receives an empty value.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(rejection) => {
                tracing::warn!(error = %rejection, "Failed to read request body, using empty value");
                return Ok(Self(T::default()));
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Self(value)),
            Err(err) => {
                tracing::warn!(error = %err, len = bytes.len(), "Discarding undecodable request body");
                Ok(Self(T::default()))
            }
        }
    }
}
