//! HTTP front end for the Life service.
//!
//! This crate provides an Axum HTTP server exposing a single endpoint,
//! `GET /nextstate`, which advances the shared [`Simulation`] by one
//! generation and returns the resulting grid as nested JSON arrays.
//!
//! # Architecture
//!
//! The session lives in [`AppState`] behind an async mutex. Each request
//! locks it, steps once, serializes the grid, and releases it, so
//! concurrent requests observe consecutive generations.
//!
//! [`Simulation`]: life_core::Simulation

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::HttpError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, serve, start_server};
pub use state::AppState;
