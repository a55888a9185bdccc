//! Handlers for the `/movies` resource.
//!
//! Each mutation holds the write lock until its response snapshot is taken,
//! so the body reflects exactly that request's change.

use axum::extract::{Path, State};
use axum::Json;
use movies_core::movie::{Movie, MovieInput};
use movies_core::types::MovieId;

use crate::error::AppResult;
use crate::extract::LenientJson;
use crate::state::AppState;

/// GET /movies
pub async fn list(State(state): State<AppState>) -> Json<Vec<Movie>> {
    let store = state.store.read().await;
    Json(store.list().to_vec())
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<Json<Movie>> {
    let movie = state.store.read().await.get(&id)?;
    Ok(Json(movie))
}

/// POST /movies
pub async fn create(
    State(state): State<AppState>,
    LenientJson(input): LenientJson<MovieInput>,
) -> Json<Movie> {
    let movie = state.store.write().await.create(input);
    tracing::debug!(id = %movie.id, "Created movie");
    Json(movie)
}

/// PUT /movies/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
    LenientJson(input): LenientJson<MovieInput>,
) -> Json<Movie> {
    let movie = input.into_movie(id.clone());
    let movie = state.store.write().await.replace_by_id(&id, movie);
    tracing::debug!(id = %movie.id, "Updated movie");
    Json(movie)
}

/// DELETE /movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> Json<Vec<Movie>> {
    let mut store = state.store.write().await;
    let removed = store.delete_by_id(&id).is_some();
    tracing::debug!(id = %id, removed, remaining = store.len(), "Deleted movie");
    Json(store.list().to_vec())
}
