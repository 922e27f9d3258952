//! The fixed-size boolean cell matrix.
//!
//! A [`Grid`] is created all dead and keeps its dimensions for its whole
//! lifetime. Cells are stored row by row, so `rows()[r][c]` is the cell at
//! row `r`, column `c`. Serializing [`Grid::rows`] yields the nested
//! `[[bool; width]; height]` shape served over HTTP.

use crate::error::EngineError;

/// A rectangular world of live and dead cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Vec<bool>>,
}

impl Grid {
    /// Create an all-dead grid with `height` rows and `width` columns.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDimension`] if either dimension is zero.
    pub fn new(height: usize, width: usize) -> Result<Self, EngineError> {
        if height == 0 || width == 0 {
            return Err(EngineError::InvalidDimension { height, width });
        }
        Ok(Self {
            height,
            width,
            cells: vec![vec![false; width]; height],
        })
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells (`height * width`).
    pub const fn area(&self) -> usize {
        self.height.saturating_mul(self.width)
    }

    /// Whether the cell at (`row`, `column`) is alive.
    ///
    /// Coordinates must be in range. Out-of-range reads are a caller bug;
    /// they trip a debug assertion and report a dead cell in release builds.
    pub fn is_alive(&self, row: usize, column: usize) -> bool {
        debug_assert!(
            row < self.height && column < self.width,
            "cell ({row}, {column}) outside {}x{} grid",
            self.height,
            self.width
        );
        self.cells
            .get(row)
            .and_then(|cells| cells.get(column))
            .copied()
            .unwrap_or(false)
    }

    /// Set the aliveness of the cell at (`row`, `column`).
    ///
    /// Out-of-range writes trip a debug assertion and are ignored otherwise.
    pub fn set_alive(&mut self, row: usize, column: usize, value: bool) {
        debug_assert!(
            row < self.height && column < self.width,
            "cell ({row}, {column}) outside {}x{} grid",
            self.height,
            self.width
        );
        if let Some(cell) = self.cells.get_mut(row).and_then(|cells| cells.get_mut(column)) {
            *cell = value;
        }
    }

    /// Read-only row-major view of the cells.
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.cells
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&alive| alive).count())
            .sum()
    }

    /// Whether `other` has the same height and width.
    pub const fn same_dimensions(&self, other: &Self) -> bool {
        self.height == other.height && self.width == other.width
    }

    /// Mark every cell dead.
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(false);
        }
    }

    /// Iterate mutably over every cell in row-major order.
    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut bool> {
        self.cells.iter_mut().flatten()
    }
}
