//! Full-grid snapshot owned by the coordinator.
//!
//! The grid is materialized only on the coordinator: once when the seed
//! pattern is loaded, and again after every collective aggregation. It is
//! always replaced wholesale, never patched in place.

use std::fmt;

/// A dense height x width cell matrix, cells in {0, 1}, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<u8>,
}

impl Grid {
    pub fn empty(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![0; height * width],
        }
    }

    /// Rebuild a grid from raw row-major cells, as the aggregator does.
    pub fn from_cells(height: usize, width: usize, cells: Vec<u8>) -> Self {
        assert_eq!(cells.len(), height * width);
        debug_assert!(cells.iter().all(|&c| c <= 1));
        Self {
            height,
            width,
            cells,
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.width + col] == 1
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        self.cells[row * self.width + col] = alive as u8;
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    /// The row-major cells of rows `[start, start + rows)`.
    pub fn rows(&self, start: usize, rows: usize) -> &[u8] {
        &self.cells[start * self.width..(start + rows) * self.width]
    }

    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn population(&self) -> u64 {
        self.cells.iter().map(|&c| c as u64).sum()
    }

    /// Swap in a freshly computed cell buffer, returning the old one for
    /// reuse as scratch.
    pub(crate) fn replace_cells(&mut self, cells: Vec<u8>) -> Vec<u8> {
        assert_eq!(cells.len(), self.height * self.width);
        std::mem::replace(&mut self.cells, cells)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}:", self.height, self.width)?;
        for row in 0..self.height {
            for col in 0..self.width {
                f.write_str(if self.get(row, col) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
