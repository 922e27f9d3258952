//! Error types for the HTTP layer.
//!
//! [`HttpError`] converts into an Axum response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use life_core::SessionError;

/// Errors that can occur while serving a request.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The simulation failed to advance.
    #[error("simulation error: {0}")]
    Simulation(#[from] SessionError),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        tracing::error!(error = %self, "request failed");

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
