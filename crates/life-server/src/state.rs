//! Shared application state for the HTTP server.
//!
//! [`AppState`] owns the one simulation session the service exposes. The
//! session sits behind an async mutex so concurrent requests step it one
//! at a time.

use life_core::Simulation;
use tokio::sync::Mutex;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
#[derive(Debug)]
pub struct AppState {
    /// The simulation session stepped by `GET /nextstate`.
    pub simulation: Mutex<Simulation>,
}

impl AppState {
    /// Wrap `simulation` for sharing with request handlers.
    pub fn new(simulation: Simulation) -> Self {
        Self {
            simulation: Mutex::new(simulation),
        }
    }
}
