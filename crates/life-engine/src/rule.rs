//! Conway's B3/S23 rule over a clamped neighborhood.
//!
//! Neighbors that fall outside the grid are treated as dead. There is no
//! wrap-around: a corner cell has three neighbors, an edge cell five.

use crate::grid::Grid;

/// Offsets `(row, column)` of the eight cells around a center cell.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count the live cells adjacent to (`row`, `column`).
///
/// Returns a value in `0..=8`.
pub fn live_neighbors(grid: &Grid, row: usize, column: usize) -> u8 {
    let mut count: u8 = 0;
    for (d_row, d_column) in NEIGHBOR_OFFSETS {
        let Some(r) = row.checked_add_signed(d_row) else {
            continue;
        };
        let Some(c) = column.checked_add_signed(d_column) else {
            continue;
        };
        if r < grid.height() && c < grid.width() && grid.is_alive(r, c) {
            count = count.saturating_add(1);
        }
    }
    count
}

/// The B3/S23 rule table.
///
/// A live cell survives with two or three neighbors; a dead cell is born
/// with exactly three. Everything else is dead next generation.
pub const fn fate(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}

/// State of the cell at (`row`, `column`) in the next generation.
pub fn next_cell_state(grid: &Grid, row: usize, column: usize) -> bool {
    fate(grid.is_alive(row, column), live_neighbors(grid, row, column))
}
