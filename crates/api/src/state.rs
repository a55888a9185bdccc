use std::sync::Arc;

use movies_core::store::MovieStore;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// The record store shared by every handler.
pub type SharedStore = Arc<RwLock<MovieStore>>;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// In-memory movie collection. Reads take the read lock, mutations the write lock.
    pub store: SharedStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state from configuration, seeding the store if requested.
    pub fn new(config: ServerConfig) -> Self {
        let store = if config.seed_movies {
            MovieStore::with_samples(config.id_strategy)
        } else {
            MovieStore::new(config.id_strategy)
        };
        Self::with_store(store, config)
    }

    /// Build state around an existing store.
    pub fn with_store(store: MovieStore, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }
}
