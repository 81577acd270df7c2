//! Sequential whole-grid reference engine.
//!
//! Evolves the full grid on one thread with toroidal wrap in both axes,
//! which is exactly what the distributed path produces once the worker
//! ring wraps the first and last bands together. Used as the parity
//! oracle for the ring engine and by the binary's `--check` mode.

use crate::grid::Grid;

pub struct SeqLife {
    grid: Grid,
    scratch: Vec<u8>,
    generation: u64,
}

impl SeqLife {
    pub fn new(grid: Grid) -> Self {
        let scratch = vec![0; grid.height() * grid.width()];
        Self {
            grid,
            scratch,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> u64 {
        self.grid.population()
    }

    pub fn step(&mut self) {
        let height = self.grid.height();
        let width = self.grid.width();
        if height == 0 || width == 0 {
            self.generation += 1;
            return;
        }

        for row in 0..height {
            let above = self.grid.row((row + height - 1) % height);
            let current = self.grid.row(row);
            let below = self.grid.row((row + 1) % height);
            let out = &mut self.scratch[row * width..(row + 1) * width];
            step_row(above, current, below, out);
        }

        let next = std::mem::take(&mut self.scratch);
        self.scratch = self.grid.replace_cells(next);
        self.generation += 1;
    }

    pub fn step_n(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }
}

/// Apply B3/S23 to one row given its two vertical neighbors, columns
/// wrapping modulo the row width. Shared with the band engine so both
/// paths evolve cells with the same rule code.
pub(crate) fn step_row(above: &[u8], current: &[u8], below: &[u8], out: &mut [u8]) {
    let width = current.len();
    debug_assert_eq!(above.len(), width);
    debug_assert_eq!(below.len(), width);
    debug_assert_eq!(out.len(), width);

    for col in 0..width {
        let left = (col + width - 1) % width;
        let right = (col + 1) % width;
        let neighbors = above[left]
            + above[col]
            + above[right]
            + current[left]
            + current[right]
            + below[left]
            + below[col]
            + below[right];
        out[col] = if current[col] == 1 {
            (neighbors == 2 || neighbors == 3) as u8
        } else {
            (neighbors == 3) as u8
        };
    }
}

#[cfg(test)]
mod tests {
    use super::SeqLife;
    use crate::grid::Grid;

    fn grid_from(height: usize, width: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::empty(height, width);
        for &(row, col) in live {
            grid.set(row, col, true);
        }
        grid
    }

    #[test]
    fn empty_grid_stays_empty() {
        let mut engine = SeqLife::new(Grid::empty(4, 4));
        engine.step_n(3);
        assert_eq!(engine.population(), 0);
        assert_eq!(engine.generation(), 3);
    }

    #[test]
    fn block_is_stable() {
        let seed = grid_from(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let mut engine = SeqLife::new(seed.clone());
        engine.step_n(5);
        assert_eq!(*engine.grid(), seed);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = grid_from(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = grid_from(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let mut engine = SeqLife::new(horizontal.clone());
        engine.step();
        assert_eq!(*engine.grid(), vertical);
        engine.step();
        assert_eq!(*engine.grid(), horizontal);
    }

    #[test]
    fn glider_wraps_around_the_torus() {
        let seed = grid_from(6, 6, &[(1, 1), (2, 2), (2, 3), (3, 1), (3, 2)]);
        let mut engine = SeqLife::new(seed.clone());
        // A glider translates by (1, 1) every 4 generations, so on a 6x6
        // torus it returns to its seed position after 24.
        engine.step_n(24);
        assert_eq!(*engine.grid(), seed);
    }
}
