//! Domain types and the in-memory record store for the movies API.
//!
//! Nothing in this crate knows about HTTP. The `movies-api` crate wraps
//! [`store::MovieStore`] behind a lock and exposes it over JSON.

pub mod error;
pub mod id;
pub mod movie;
pub mod store;
pub mod types;
