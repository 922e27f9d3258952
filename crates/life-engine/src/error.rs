//! Error types for the `life-engine` crate.
//!
//! All fallible operations in this crate return [`EngineError`].

/// Errors that can occur while building or advancing grids.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A grid was requested with a zero height or width.
    #[error("invalid grid dimensions {height}x{width}: both must be positive")]
    InvalidDimension {
        /// Requested number of rows.
        height: usize,
        /// Requested number of columns.
        width: usize,
    },

    /// Source and destination grids passed to the stepper differ in shape.
    #[error("grid dimension mismatch: source is {source_height}x{source_width}, destination is {destination_height}x{destination_width}")]
    DimensionMismatch {
        /// Rows in the source grid.
        source_height: usize,
        /// Columns in the source grid.
        source_width: usize,
        /// Rows in the destination grid.
        destination_height: usize,
        /// Columns in the destination grid.
        destination_width: usize,
    },
}
