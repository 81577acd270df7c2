//! A worker's row band and the in-place generation step.
//!
//! The band owns its rows exclusively; the two ghost rows are borrowed
//! from the neighbors for the duration of one step. The step computes
//! into a scratch buffer and swaps, so the read side is never aliased by
//! the write side.

use crate::seqlife::step_row;

use super::partition::RowRange;

pub struct Band {
    range: RowRange,
    width: usize,
    cells: Vec<u8>,
    scratch: Vec<u8>,
}

impl Band {
    pub fn new(range: RowRange, width: usize, cells: Vec<u8>) -> Self {
        assert_eq!(cells.len(), range.rows * width);
        let scratch = vec![0; cells.len()];
        Self {
            range,
            width,
            cells,
            scratch,
        }
    }

    #[inline]
    pub fn range(&self) -> RowRange {
        self.range
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// First row of the band. Must not be called on a zero-row band.
    pub fn top_row(&self) -> &[u8] {
        assert!(!self.is_empty());
        &self.cells[..self.width]
    }

    /// Last row of the band. Must not be called on a zero-row band.
    pub fn bottom_row(&self) -> &[u8] {
        assert!(!self.is_empty());
        &self.cells[(self.range.rows - 1) * self.width..]
    }

    /// Advance the band one generation given the neighbors' boundary
    /// rows. Ghost rows of the wrong shape are caller defects.
    pub fn step(&mut self, top_ghost: &[u8], bottom_ghost: &[u8]) {
        assert_eq!(top_ghost.len(), self.width, "top ghost row shape");
        assert_eq!(bottom_ghost.len(), self.width, "bottom ghost row shape");
        debug_assert!(top_ghost.iter().chain(bottom_ghost).all(|&c| c <= 1));

        let rows = self.range.rows;
        let width = self.width;
        for row in 0..rows {
            let above = if row == 0 {
                top_ghost
            } else {
                &self.cells[(row - 1) * width..row * width]
            };
            let below = if row + 1 == rows {
                bottom_ghost
            } else {
                &self.cells[(row + 1) * width..(row + 2) * width]
            };
            let current = &self.cells[row * width..(row + 1) * width];
            let out = &mut self.scratch[row * width..(row + 1) * width];
            step_row(above, current, below, out);
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }
}

#[cfg(test)]
mod tests {
    use super::Band;
    use crate::ringlife::partition::RowRange;

    fn band_from_rows(rows: &[&[u8]]) -> Band {
        let width = rows[0].len();
        let cells: Vec<u8> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Band::new(
            RowRange {
                start: 0,
                rows: rows.len(),
            },
            width,
            cells,
        )
    }

    #[test]
    fn all_dead_interior_stays_dead() {
        let mut band = band_from_rows(&[&[0, 0, 0], &[0, 0, 0], &[0, 0, 0]]);
        band.step(&[0, 0, 0], &[0, 0, 0]);
        assert!(band.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn isolated_live_cell_dies() {
        let mut band = band_from_rows(&[&[0, 0, 0, 0], &[0, 1, 0, 0], &[0, 0, 0, 0]]);
        band.step(&[0, 0, 0, 0], &[0, 0, 0, 0]);
        assert!(band.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        // Whole 5x5 grid on one band; vertical wrap feeds the band its own
        // boundary rows, exactly what the ring does for a single worker.
        let horizontal: &[&[u8]] = &[
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 1, 1, 1, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
        ];
        let mut band = band_from_rows(horizontal);
        let seed = band.cells().to_vec();

        for step in 0..4 {
            let top_ghost = band.bottom_row().to_vec();
            let bottom_ghost = band.top_row().to_vec();
            band.step(&top_ghost, &bottom_ghost);
            if step % 2 == 0 {
                let vertical: Vec<u8> = [
                    [0u8, 0, 0, 0, 0],
                    [0, 0, 1, 0, 0],
                    [0, 0, 1, 0, 0],
                    [0, 0, 1, 0, 0],
                    [0, 0, 0, 0, 0],
                ]
                .concat();
                assert_eq!(band.cells(), &vertical[..]);
            } else {
                assert_eq!(band.cells(), &seed[..]);
            }
        }
    }

    #[test]
    fn ghost_rows_feed_the_band_edges() {
        // Two live cells in the top ghost row are the only neighbors of
        // the band's top-row cell; without the ghost row it would die,
        // with it the count is exactly 2 and it survives.
        let mut band = band_from_rows(&[&[0, 0, 1, 0, 0], &[0, 0, 0, 0, 0]]);
        band.step(&[0, 1, 0, 1, 0], &[0, 0, 0, 0, 0]);
        assert_eq!(band.cells()[2], 1);
    }

    #[test]
    #[should_panic(expected = "top ghost row shape")]
    fn malformed_ghost_row_is_a_defect() {
        let mut band = band_from_rows(&[&[0, 0, 0]]);
        band.step(&[0, 0], &[0, 0, 0]);
    }
}
