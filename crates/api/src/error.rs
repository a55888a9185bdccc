use axum::response::{IntoResponse, Response};
use movies_core::error::CoreError;

use crate::response::EmptyJson;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and implements [`IntoResponse`]. A missing movie is
/// not surfaced as an error status: it renders as [`EmptyJson`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `movies_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id = %id, "Lookup missed, returning empty body");
                EmptyJson.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::header::CONTENT_TYPE;
    use axum::http::StatusCode;

    use super::*;

    #[tokio::test]
    async fn not_found_renders_empty_success() {
        let response = AppError::from(CoreError::NotFound {
            entity: "Movie",
            id: "x".into(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty(), "no error document is written");
    }
}
