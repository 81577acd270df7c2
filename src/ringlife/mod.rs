//! Ring-of-workers engine internals and public API.

mod band;
mod engine;
mod partition;
mod ring;
mod snapshot;

pub use band::Band;
pub use engine::{RingLife, RingLifeConfig, RunState};
pub use partition::{split_rows, RowRange};
pub use ring::{wire, Links, Row};
pub use snapshot::{assemble_slices, relay_rank, BandSlice};
