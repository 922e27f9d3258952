//! Random initial population of a grid.
//!
//! # Strategies
//!
//! | Strategy | Live cells afterwards | Distribution |
//! |----------|-----------------------|--------------|
//! | [`PopulateStrategy::Scatter`] | roughly the target, not exact | copy-based scatter |
//! | [`PopulateStrategy::Exact`] | exactly the target | uniform sample |
//!
//! Both strategies compute the target as
//! `floor(percentage * height * width / 100)` with `percentage` clamped to
//! `0..=100`.
//!
//! The scatter strategy pre-fills the first `target` cells in row-major order
//! and then performs `height * width` random copies: pick a destination cell
//! and a source cell independently and overwrite the destination with the
//! source's state. Copies are one-directional, so the live count drifts away
//! from the target. At 0% nothing is alive to copy and the grid stays dead;
//! at 100% it stays full.
//!
//! The random source is always passed in, so a seeded generator reproduces
//! the same grid.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grid::Grid;

/// Upper bound for the density percentage.
pub const MAX_PERCENTAGE: u8 = 100;

/// How the initial live cells are placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopulateStrategy {
    /// Row-major pre-fill followed by random one-directional copies.
    #[default]
    Scatter,
    /// Exactly `target` distinct cells chosen uniformly at random.
    Exact,
}

/// Number of cells the populator aims to bring alive.
pub fn target_live_cells(grid: &Grid, percentage: u8) -> usize {
    let percentage = usize::from(percentage.min(MAX_PERCENTAGE));
    grid.area()
        .saturating_mul(percentage)
        .checked_div(usize::from(MAX_PERCENTAGE))
        .unwrap_or(0)
}

/// Populate `grid` at `percentage` density using `strategy`.
///
/// Any previous contents are discarded.
pub fn populate<R: Rng + ?Sized>(
    grid: &mut Grid,
    percentage: u8,
    strategy: PopulateStrategy,
    rng: &mut R,
) {
    match strategy {
        PopulateStrategy::Scatter => randomize(grid, percentage, rng),
        PopulateStrategy::Exact => sample_exact(grid, percentage, rng),
    }
    debug!(
        ?strategy,
        percentage,
        live_cells = grid.live_count(),
        area = grid.area(),
        "Grid populated"
    );
}

/// Scatter strategy: row-major pre-fill, then `height * width` random copies.
pub fn randomize<R: Rng + ?Sized>(grid: &mut Grid, percentage: u8, rng: &mut R) {
    let target = target_live_cells(grid, percentage);
    fill_leading(grid, target);

    let (height, width) = (grid.height(), grid.width());
    for _ in 0..grid.area() {
        let to_row = rng.random_range(0..height);
        let to_column = rng.random_range(0..width);
        let from_row = rng.random_range(0..height);
        let from_column = rng.random_range(0..width);

        let alive = grid.is_alive(from_row, from_column);
        grid.set_alive(to_row, to_column, alive);
    }
}

/// Exact strategy: mark exactly the target number of distinct cells alive.
pub fn sample_exact<R: Rng + ?Sized>(grid: &mut Grid, percentage: u8, rng: &mut R) {
    let target = target_live_cells(grid, percentage);
    grid.clear();

    let width = grid.width();
    for index in rand::seq::index::sample(rng, grid.area(), target) {
        let (Some(row), Some(column)) = (index.checked_div(width), index.checked_rem(width)) else {
            continue;
        };
        grid.set_alive(row, column, true);
    }
}

/// Mark the first `count` cells alive in row-major order, the rest dead.
fn fill_leading(grid: &mut Grid, count: usize) {
    for (index, cell) in grid.cells_mut().enumerate() {
        *cell = index < count;
    }
}
