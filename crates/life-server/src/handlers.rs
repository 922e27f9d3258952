//! Request handlers.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/nextstate` | Advance one generation, return the grid |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use tracing::debug;

use crate::error::HttpError;
use crate::state::AppState;

/// Advance the simulation by one generation and return the new grid.
///
/// The body is a JSON array of rows, each an array of booleans. Every call
/// mutates the shared session, so the endpoint is not idempotent.
pub async fn next_state(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Vec<bool>>>, HttpError> {
    let mut simulation = state.simulation.lock().await;
    let rows = simulation.step()?.rows().to_vec();
    let generation = simulation.generation();
    drop(simulation);

    debug!(generation, "Served next state");
    Ok(Json(rows))
}
