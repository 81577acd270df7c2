//! Collective snapshot assembly.
//!
//! Every rank offers its row-range-tagged band to the relay; the relay
//! rebuilds the full grid keyed by row range and forwards exactly one
//! consolidated message to the coordinator. Staging the gather on a rank
//! other than the coordinator keeps heavy collection and rendering off
//! the same rank when more than one worker exists.
//!
//! The gather lane is shared by all ranks, but slices from different
//! generations can never interleave: no rank starts generation g + 1
//! before the continuation broadcast, and the coordinator only issues
//! that broadcast after the snapshot for generation g is fully
//! assembled.

use crate::error::Result;
use crate::grid::Grid;

use super::band::Band;
use super::partition::RowRange;
use super::ring::Links;

/// One rank's contribution to a snapshot: its band, tagged with the row
/// range that keys its placement. Arrival order is irrelevant.
pub struct BandSlice {
    pub range: RowRange,
    pub cells: Vec<u8>,
}

/// Deterministic relay selection: worker 1 when more than one worker
/// exists, else worker 0. Any deterministic rule would do; this one is
/// kept because it moves aggregation off the rendering rank.
pub fn relay_rank(size: usize) -> usize {
    usize::from(size > 1)
}

/// Rebuild a full grid from row-range-tagged slices. Pure: assembling
/// the same slices twice yields byte-identical grids.
pub fn assemble_slices(
    height: usize,
    width: usize,
    slices: impl IntoIterator<Item = BandSlice>,
) -> Grid {
    let mut cells = vec![0u8; height * width];
    for slice in slices {
        debug_assert_eq!(slice.cells.len(), slice.range.rows * width);
        cells[slice.range.start * width..slice.range.end() * width].copy_from_slice(&slice.cells);
    }
    Grid::from_cells(height, width, cells)
}

/// Run one collective snapshot round from this rank's seat. Returns the
/// assembled grid on the coordinator, `None` everywhere else.
pub fn snapshot_round(
    links: &Links,
    band: &Band,
    height: usize,
    width: usize,
) -> Result<Option<Grid>> {
    links.send_band(BandSlice {
        range: band.range(),
        cells: band.cells().to_vec(),
    })?;

    match (links.is_relay(), links.is_coordinator()) {
        // Single worker: relay and coordinator coincide, the hand-off is
        // a local assembly.
        (true, true) => {
            let slices = links.collect_bands()?;
            Ok(Some(assemble_slices(height, width, slices)))
        }
        (true, false) => {
            let slices = links.collect_bands()?;
            links.forward_snapshot(assemble_slices(height, width, slices))?;
            Ok(None)
        }
        (false, true) => Ok(Some(links.recv_snapshot()?)),
        (false, false) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::{assemble_slices, relay_rank, BandSlice};
    use crate::ringlife::partition::{split_rows, RowRange};

    fn slice(start: usize, rows: usize, width: usize, fill: u8) -> BandSlice {
        BandSlice {
            range: RowRange { start, rows },
            cells: vec![fill; rows * width],
        }
    }

    #[test]
    fn relay_is_distinct_from_coordinator_when_possible() {
        assert_eq!(relay_rank(1), 0);
        assert_eq!(relay_rank(2), 1);
        assert_eq!(relay_rank(8), 1);
    }

    #[test]
    fn assembly_is_keyed_by_row_range_not_arrival_order() {
        let shuffled = vec![slice(3, 2, 4, 1), slice(0, 3, 4, 0), slice(5, 1, 4, 1)];
        let grid = assemble_slices(6, 4, shuffled);
        for row in 0..6 {
            let expected = u8::from(row >= 3);
            assert!(grid.row(row).iter().all(|&c| c == expected), "row {row}");
        }
    }

    #[test]
    fn assembly_is_idempotent() {
        let make = || {
            split_rows(9, 4)
                .into_iter()
                .enumerate()
                .map(|(rank, range)| slice(range.start, range.rows, 3, (rank % 2) as u8))
                .collect::<Vec<_>>()
        };
        let first = assemble_slices(9, 3, make());
        let second = assemble_slices(9, 3, make());
        assert_eq!(first, second);
        assert_eq!(first.cells(), second.cells());
    }

    #[test]
    fn empty_slices_are_legal_contributions() {
        let slices = vec![slice(0, 2, 3, 1), slice(2, 0, 3, 0), slice(2, 0, 3, 0)];
        let grid = assemble_slices(2, 3, slices);
        assert_eq!(grid.population(), 6);
    }
}
