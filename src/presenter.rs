//! Presentation seam consumed by the coordinator.
//!
//! The engine never owns a window or an event loop; it hands each
//! snapshot to a `Presenter` and asks it whether the user wants out.
//! Only the coordinator rank ever touches these calls.

use std::io::Write;
use std::time::Duration;

use crate::grid::Grid;

pub trait Presenter {
    /// Render one full-grid snapshot.
    fn draw(&mut self, grid: &Grid);

    /// True once the user has requested termination. Polled by the
    /// coordinator after each draw; the answer feeds the continuation
    /// broadcast.
    fn poll_quit(&mut self) -> bool;
}

/// Headless presenter for checks and benchmarks.
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn draw(&mut self, _grid: &Grid) {}

    fn poll_quit(&mut self) -> bool {
        false
    }
}

/// ANSI terminal renderer. Draws at most `max_rows` x `max_cols` cells
/// from the top-left corner of the grid and paces frames with a fixed
/// delay. A dead output stream (closed pipe, for one) counts as a quit
/// request, so the ring is not kept spinning for frames nobody sees.
pub struct TerminalPresenter {
    max_rows: usize,
    max_cols: usize,
    frame_delay: Duration,
    cleared: bool,
    output_gone: bool,
    out: Box<dyn Write>,
}

impl TerminalPresenter {
    pub fn new(max_rows: usize, max_cols: usize, frame_delay: Duration) -> Self {
        Self::with_writer(max_rows, max_cols, frame_delay, Box::new(std::io::stdout()))
    }

    pub fn with_writer(
        max_rows: usize,
        max_cols: usize,
        frame_delay: Duration,
        out: Box<dyn Write>,
    ) -> Self {
        Self {
            max_rows,
            max_cols,
            frame_delay,
            cleared: false,
            output_gone: false,
            out,
        }
    }
}

impl Presenter for TerminalPresenter {
    fn draw(&mut self, grid: &Grid) {
        if self.output_gone {
            return;
        }

        let rows = grid.height().min(self.max_rows);
        let cols = grid.width().min(self.max_cols);

        let mut frame = String::with_capacity((cols + 1) * rows + 8);
        if !self.cleared {
            frame.push_str("\x1b[2J");
            self.cleared = true;
        }
        frame.push_str("\x1b[H");
        for row in 0..rows {
            for col in 0..cols {
                frame.push(if grid.get(row, col) { '\u{2588}' } else { '\u{00b7}' });
            }
            frame.push('\n');
        }

        let written = self
            .out
            .write_all(frame.as_bytes())
            .and_then(|_| self.out.flush());
        if written.is_err() {
            self.output_gone = true;
            return;
        }
        std::thread::sleep(self.frame_delay);
    }

    fn poll_quit(&mut self) -> bool {
        self.output_gone
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::time::Duration;

    use super::{Presenter, TerminalPresenter};
    use crate::grid::Grid;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn dead_output_stream_requests_termination() {
        let mut presenter =
            TerminalPresenter::with_writer(4, 4, Duration::ZERO, Box::new(ClosedPipe));
        assert!(!presenter.poll_quit());
        presenter.draw(&Grid::empty(4, 4));
        assert!(presenter.poll_quit());
        // Further draws are no-ops, not repeated write attempts.
        presenter.draw(&Grid::empty(4, 4));
        assert!(presenter.poll_quit());
    }

    #[test]
    fn healthy_output_stream_never_quits() {
        let mut presenter =
            TerminalPresenter::with_writer(4, 4, Duration::ZERO, Box::new(Vec::<u8>::new()));
        presenter.draw(&Grid::empty(4, 4));
        assert!(!presenter.poll_quit());
    }
}
