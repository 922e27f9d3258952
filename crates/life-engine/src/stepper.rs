//! Double-buffered generation advance.
//!
//! [`advance`] reads generation `t` from one grid and writes generation
//! `t + 1` into another. The caller owns both buffers and swaps them after
//! each call, so no allocation happens per step.

use crate::error::EngineError;
use crate::grid::Grid;
use crate::rule::next_cell_state;

/// Compute the next generation of `source` into `destination`.
///
/// Every cell of `destination` is overwritten. `source` is only borrowed
/// shared and is never modified.
///
/// # Errors
///
/// Returns [`EngineError::DimensionMismatch`] if the grids differ in shape.
/// `destination` is left untouched in that case.
pub fn advance(source: &Grid, destination: &mut Grid) -> Result<(), EngineError> {
    if !source.same_dimensions(destination) {
        return Err(EngineError::DimensionMismatch {
            source_height: source.height(),
            source_width: source.width(),
            destination_height: destination.height(),
            destination_width: destination.width(),
        });
    }

    for row in 0..source.height() {
        for column in 0..source.width() {
            destination.set_alive(row, column, next_cell_state(source, row, column));
        }
    }
    Ok(())
}
