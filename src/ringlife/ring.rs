//! Ring wiring and the paired boundary-row exchange.
//!
//! Each edge between adjacent ranks carries two dedicated channels, one
//! per travel direction, so a rank that is its own neighbor (size == 1)
//! gets its boundary rows routed back without crossing them. Sends go
//! through unbounded channels and never block; the two receives complete
//! the paired exchange, so no send/receive ordering can deadlock the
//! ring.

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::error::{LifeError, Result};
use crate::grid::Grid;

use super::snapshot::{relay_rank, BandSlice};

/// One boundary row in flight.
pub type Row = Vec<u8>;

/// A rank's endpoint into the wiring: its two ring edges, the gather
/// lane to the relay, the relay's forward lane to the coordinator, and
/// the continuation-broadcast lane.
pub struct Links {
    rank: usize,
    size: usize,
    relay: usize,
    /// Own top row out to the up neighbor.
    up_tx: Sender<Row>,
    /// Up neighbor's bottom row in.
    up_rx: Receiver<Row>,
    /// Own bottom row out to the down neighbor.
    down_tx: Sender<Row>,
    /// Down neighbor's top row in.
    down_rx: Receiver<Row>,
    gather_tx: Sender<BandSlice>,
    gather_rx: Option<Receiver<BandSlice>>,
    forward_tx: Option<Sender<Grid>>,
    snapshot_rx: Option<Receiver<Grid>>,
    ctrl_rx: Receiver<bool>,
    ctrl_tx: Option<Vec<Sender<bool>>>,
}

/// Build the endpoints for a ring of `size` ranks. Rank 0 is the
/// coordinator; the relay is `relay_rank(size)`.
pub fn wire(size: usize) -> Vec<Links> {
    assert!(size >= 1, "at least one rank required");
    let relay = relay_rank(size);

    // down_edges[r] carries rank r's bottom row to rank (r + 1) % size;
    // up_edges[r] carries rank (r + 1) % size's top row back to rank r.
    let down_edges: Vec<(Sender<Row>, Receiver<Row>)> = (0..size).map(|_| unbounded()).collect();
    let up_edges: Vec<(Sender<Row>, Receiver<Row>)> = (0..size).map(|_| unbounded()).collect();

    let (gather_tx, gather_rx) = unbounded();
    let forward = if relay != 0 {
        Some(unbounded::<Grid>())
    } else {
        None
    };
    let ctrl: Vec<(Sender<bool>, Receiver<bool>)> = (0..size).map(|_| unbounded()).collect();
    let ctrl_txs: Vec<Sender<bool>> = ctrl.iter().map(|(tx, _)| tx.clone()).collect();

    (0..size)
        .map(|rank| {
            let up = (rank + size - 1) % size;
            Links {
                rank,
                size,
                relay,
                up_tx: up_edges[up].0.clone(),
                up_rx: down_edges[up].1.clone(),
                down_tx: down_edges[rank].0.clone(),
                down_rx: up_edges[rank].1.clone(),
                gather_tx: gather_tx.clone(),
                gather_rx: (rank == relay).then(|| gather_rx.clone()),
                forward_tx: forward
                    .as_ref()
                    .and_then(|(tx, _)| (rank == relay).then(|| tx.clone())),
                snapshot_rx: forward
                    .as_ref()
                    .and_then(|(_, rx)| (rank == 0).then(|| rx.clone())),
                ctrl_rx: ctrl[rank].1.clone(),
                ctrl_tx: (rank == 0).then(|| ctrl_txs.clone()),
            }
        })
        .collect()
}

impl Links {
    #[inline]
    pub fn rank(&self) -> usize {
        self.rank
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_coordinator(&self) -> bool {
        self.rank == 0
    }

    #[inline]
    pub fn is_relay(&self) -> bool {
        self.rank == self.relay
    }

    fn closed(&self, stage: &'static str) -> LifeError {
        LifeError::LinkClosed {
            rank: self.rank,
            stage,
        }
    }

    /// One generation boundary: offer the band's top row to the up
    /// neighbor and its bottom row to the down neighbor, and collect the
    /// two ghost rows in return.
    pub fn exchange(&self, top_row: Row, bottom_row: Row) -> Result<(Row, Row)> {
        self.up_tx
            .send(top_row)
            .map_err(|_| self.closed("halo send up"))?;
        self.down_tx
            .send(bottom_row)
            .map_err(|_| self.closed("halo send down"))?;
        let top_ghost = self.up_rx.recv().map_err(|_| self.closed("halo recv up"))?;
        let bottom_ghost = self
            .down_rx
            .recv()
            .map_err(|_| self.closed("halo recv down"))?;
        Ok((top_ghost, bottom_ghost))
    }

    /// Degenerate exchange for a zero-row band: forward the boundary row
    /// travelling down, then the one travelling up, so neighbors across
    /// the empty band are not starved. Receives must come first here:
    /// this rank has nothing of its own to offer.
    pub fn pass_through(&self) -> Result<()> {
        let downward = self.up_rx.recv().map_err(|_| self.closed("halo recv up"))?;
        self.down_tx
            .send(downward)
            .map_err(|_| self.closed("halo send down"))?;
        let upward = self
            .down_rx
            .recv()
            .map_err(|_| self.closed("halo recv down"))?;
        self.up_tx
            .send(upward)
            .map_err(|_| self.closed("halo send up"))?;
        Ok(())
    }

    /// Offer this rank's band to the relay (collective, every rank).
    pub fn send_band(&self, slice: BandSlice) -> Result<()> {
        self.gather_tx
            .send(slice)
            .map_err(|_| self.closed("band gather"))
    }

    /// Collect one band per rank. Relay only.
    pub fn collect_bands(&self) -> Result<Vec<BandSlice>> {
        let rx = self.gather_rx.as_ref().expect("collect_bands on non-relay");
        let mut slices = Vec::with_capacity(self.size);
        for _ in 0..self.size {
            slices.push(rx.recv().map_err(|_| self.closed("band collect"))?);
        }
        Ok(slices)
    }

    /// Hand the assembled snapshot to the coordinator. Relay only, and
    /// only when the relay is not itself the coordinator.
    pub fn forward_snapshot(&self, grid: Grid) -> Result<()> {
        let tx = self
            .forward_tx
            .as_ref()
            .expect("forward_snapshot on non-relay");
        tx.send(grid).map_err(|_| self.closed("snapshot forward"))
    }

    /// Receive the relay's consolidated snapshot. Coordinator only.
    pub fn recv_snapshot(&self) -> Result<Grid> {
        let rx = self
            .snapshot_rx
            .as_ref()
            .expect("recv_snapshot on non-coordinator");
        rx.recv().map_err(|_| self.closed("snapshot recv"))
    }

    /// Replicate the continuation flag to every rank, self included.
    /// Coordinator only; this is the single synchronization point that
    /// stops all ranks on the same generation boundary.
    pub fn broadcast_continue(&self, keep_running: bool) -> Result<()> {
        let txs = self
            .ctrl_tx
            .as_ref()
            .expect("broadcast_continue on non-coordinator");
        for tx in txs {
            tx.send(keep_running)
                .map_err(|_| self.closed("continuation broadcast"))?;
        }
        Ok(())
    }

    /// Block until the coordinator's continuation decision arrives.
    pub fn recv_continue(&self) -> Result<bool> {
        self.ctrl_rx
            .recv()
            .map_err(|_| self.closed("continuation recv"))
    }
}
