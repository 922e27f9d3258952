//! Axum router construction.
//!
//! Assembles the routes into a single [`Router`] with request logging and
//! CORS enabled so a browser page on another origin can poll the grid.

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::middleware::log_requests;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /nextstate` -- advance one generation and return the grid
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/nextstate", get(handlers::next_state))
        .layer(cors)
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}
