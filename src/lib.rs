//! Row-banded Conway's Game of Life engine (B3/S23) over a ring of workers.

pub mod error;
pub mod grid;
pub mod pattern;
pub mod presenter;
pub mod ringlife;
pub mod seqlife;

pub use grid::Grid;
pub use ringlife::{RingLife, RingLifeConfig};
pub use seqlife::SeqLife;
