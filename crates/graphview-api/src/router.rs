//! Route definitions for the GraphView HTTP API.
//!
//! All routes are mounted under `/api` and run behind the session cookie
//! middleware.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Builds the API router with its state.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.server.max_upload_bytes;

    let api_routes = Router::new()
        .merge(diagram_routes())
        .merge(account_routes())
        .merge(system_routes())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::session::session_cookie,
        ));

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .with_state(state)
}

/// Diagram upload and retrieval
fn diagram_routes() -> Router<AppState> {
    Router::new()
        .route("/diagram/upload", post(handlers::upload::upload_diagram))
        .route(
            "/session-diagram",
            get(handlers::diagram::get_session_diagram),
        )
}

/// Registration
fn account_routes() -> Router<AppState> {
    Router::new().route("/register", post(handlers::register::register))
}

/// Module listing and health
fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/modules", get(handlers::modules::list_modules))
        .route("/health", get(handlers::health::health))
}
