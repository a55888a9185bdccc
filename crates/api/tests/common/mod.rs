#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use movies_core::id::IdStrategy;
use movies_core::movie::Movie;
use movies_core::store::MovieStore;
use tower::ServiceExt;

use movies_api::config::ServerConfig;
use movies_api::router::build_app_router;
use movies_api::state::AppState;

/// Build a test `ServerConfig` with sequential ids so assertions are stable.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        id_strategy: IdStrategy::Sequential,
        seed_movies: false,
    }
}

/// Full application router over an empty store.
pub fn build_test_app() -> Router {
    build_app_router(AppState::new(test_config()))
}

/// Full application router over a store holding `movies` in order.
pub fn build_test_app_with(movies: Vec<Movie>) -> Router {
    let mut store = MovieStore::new(IdStrategy::Sequential);
    for movie in movies {
        store.insert(movie);
    }
    build_app_router(AppState::with_store(store, test_config()))
}

pub fn movie(id: &str, isbn: &str, title: &str) -> Movie {
    Movie {
        id: id.to_string(),
        isbn: isbn.to_string(),
        title: title.to_string(),
        director: None,
    }
}

async fn send(app: &Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: &Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

pub async fn put_json(app: &Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Body::from(json.to_string())).await
}

/// Send a raw (possibly malformed) body.
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &'static str) -> Response<Body> {
    send(app, method, uri, Body::from(body)).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Ids of a JSON array of movies, in order.
pub fn ids(json: &serde_json::Value) -> Vec<String> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap().to_string())
        .collect()
}
