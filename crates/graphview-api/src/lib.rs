//! # graphview-api
//!
//! HTTP API layer for GraphView built on Axum.
//!
//! Provides the diagram upload and retrieval endpoints, registration, module
//! listing, health, the session cookie middleware, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
