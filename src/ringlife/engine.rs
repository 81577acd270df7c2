//! Lockstep driver: exchange, compute, snapshot, present, broadcast.
//!
//! One thread per rank, fixed identities, no elasticity. All inter-rank
//! operations block the issuing rank, so consistency comes purely from
//! the protocol's ordering: the exchange for generation g strictly
//! precedes the compute for g, and the continuation broadcast closes g
//! before any rank touches g + 1.

use std::thread;
use std::time::Instant;

use tracing::debug;

use crate::error::{LifeError, Result};
use crate::grid::Grid;
use crate::presenter::Presenter;

use super::band::Band;
use super::partition::split_rows;
use super::ring::{wire, Links};
use super::snapshot::snapshot_round;

/// Per-rank view of the simulation state machine. Only the coordinator
/// ever decides `Stopping`; every rank reaches `Terminated` through the
/// same continuation broadcast, never unilaterally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopping,
    Terminated,
}

#[derive(Clone, Copy, Debug)]
pub struct RingLifeConfig {
    workers: usize,
    max_generations: Option<u64>,
}

impl Default for RingLifeConfig {
    fn default() -> Self {
        Self {
            workers: 1,
            max_generations: None,
        }
    }
}

impl RingLifeConfig {
    pub fn workers(mut self, workers: usize) -> Self {
        assert!(workers >= 1, "at least one worker required");
        self.workers = workers;
        self
    }

    pub fn max_generations(mut self, generations: u64) -> Self {
        self.max_generations = Some(generations);
        self
    }
}

/// Row-banded Game of Life over a ring of lockstep workers.
pub struct RingLife {
    config: RingLifeConfig,
}

impl Default for RingLife {
    fn default() -> Self {
        Self::new()
    }
}

impl RingLife {
    pub fn new() -> Self {
        Self::with_config(RingLifeConfig::default())
    }

    pub fn with_config(config: RingLifeConfig) -> Self {
        Self { config }
    }

    /// Run the simulation from `initial` until the presenter requests
    /// termination or the configured generation limit is reached,
    /// returning the final full-grid snapshot.
    ///
    /// The coordinator (rank 0) runs on the calling thread and is the
    /// only rank that touches `presenter`.
    pub fn run(&self, initial: &Grid, presenter: &mut dyn Presenter) -> Result<Grid> {
        if self.config.max_generations == Some(0) {
            return Ok(initial.clone());
        }

        let size = self.config.workers;
        let height = initial.height();
        let width = initial.width();
        let ranges = split_rows(height, size);
        let mut links = wire(size);
        let coordinator_links = links.remove(0);

        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(size - 1);
            for (links, range) in links.into_iter().zip(ranges[1..].iter().copied()) {
                let band = Band::new(range, width, initial.rows(range.start, range.rows).to_vec());
                let worker = Worker {
                    links,
                    band,
                    height,
                    width,
                };
                handles.push(scope.spawn(move || worker_loop(worker)));
            }

            let coordinator = Worker {
                links: coordinator_links,
                band: Band::new(
                    ranges[0],
                    width,
                    initial.rows(ranges[0].start, ranges[0].rows).to_vec(),
                ),
                height,
                width,
            };
            let outcome =
                coordinator_loop(coordinator, presenter, self.config.max_generations, initial);

            let mut worker_error = None;
            for (offset, handle) in handles.into_iter().enumerate() {
                match handle.join() {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => {
                        worker_error.get_or_insert(e);
                    }
                    Err(_) => {
                        worker_error.get_or_insert(LifeError::WorkerPanicked { rank: offset + 1 });
                    }
                }
            }

            // A coordinator-side link error is usually the echo of a
            // worker failure; report the root cause when one exists.
            match (outcome, worker_error) {
                (Ok(grid), None) => Ok(grid),
                (_, Some(e)) => Err(e),
                (Err(e), None) => Err(e),
            }
        })
    }
}

struct Worker {
    links: Links,
    band: Band,
    height: usize,
    width: usize,
}

impl Worker {
    /// Halo exchange plus compute for one generation. A zero-row band
    /// only forwards boundary traffic; with a zero-row grid there is no
    /// boundary traffic at all.
    fn step_band(&mut self) -> Result<()> {
        if self.band.is_empty() {
            if self.height > 0 {
                self.links.pass_through()?;
            }
            return Ok(());
        }
        let (top_ghost, bottom_ghost) = self
            .links
            .exchange(self.band.top_row().to_vec(), self.band.bottom_row().to_vec())?;
        self.band.step(&top_ghost, &bottom_ghost);
        Ok(())
    }
}

fn worker_loop(mut worker: Worker) -> Result<()> {
    let mut state = RunState::Running;
    while state == RunState::Running {
        worker.step_band()?;
        snapshot_round(&worker.links, &worker.band, worker.height, worker.width)?;
        if !worker.links.recv_continue()? {
            state = RunState::Terminated;
        }
    }
    Ok(())
}

fn coordinator_loop(
    mut worker: Worker,
    presenter: &mut dyn Presenter,
    max_generations: Option<u64>,
    initial: &Grid,
) -> Result<Grid> {
    let mut state = RunState::Running;
    let mut snapshot = initial.clone();
    let mut generation: u64 = 0;

    while state == RunState::Running {
        let started = Instant::now();
        worker.step_band()?;
        let computed = Instant::now();

        snapshot = snapshot_round(&worker.links, &worker.band, worker.height, worker.width)?
            .expect("coordinator always receives the snapshot");
        presenter.draw(&snapshot);
        generation += 1;

        let quit = presenter.poll_quit();
        let limit_reached = max_generations.is_some_and(|max| generation >= max);
        if quit || limit_reached {
            state = RunState::Stopping;
        }
        debug!(
            generation,
            compute_us = computed.duration_since(started).as_micros() as u64,
            present_us = computed.elapsed().as_micros() as u64,
            "generation complete"
        );

        worker.links.broadcast_continue(state == RunState::Running)?;
        if !worker.links.recv_continue()? {
            state = RunState::Terminated;
        }
    }

    Ok(snapshot)
}
