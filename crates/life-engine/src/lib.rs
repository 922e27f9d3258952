//! Simulation engine for Conway's Game of Life.
//!
//! This crate is pure computation: no I/O, no shared state, no threads.
//!
//! # Modules
//!
//! - [`error`] -- Error types for grid construction and stepping.
//! - [`grid`] -- [`Grid`], the fixed-size boolean cell matrix.
//! - [`rule`] -- Clamped neighbor counting and the B3/S23 rule.
//! - [`stepper`] -- Double-buffered generation advance.
//! - [`populator`] -- Seeding a grid at a target density from an injected
//!   random source.

pub mod error;
pub mod grid;
pub mod populator;
pub mod rule;
pub mod stepper;

// Re-export primary types at crate root.
pub use error::EngineError;
pub use grid::Grid;
pub use populator::{PopulateStrategy, populate, randomize, sample_exact};
pub use rule::{fate, live_neighbors, next_cell_state};
pub use stepper::advance;
