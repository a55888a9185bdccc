//! Response helpers shared by handlers and error mapping.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// `200 OK` with a JSON content type and no body.
///
/// Returned when a movie lookup misses. Clients see success and an empty
/// payload rather than an error document.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyJson;

impl IntoResponse for EmptyJson {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        )
            .into_response()
    }
}
