//! Crate error type.
//!
//! Only two failure families exist at runtime: a bad launch configuration
//! detected before any worker starts, and a closed link in the lockstep
//! protocol, which has no well-defined state to resume from. Malformed
//! ghost rows are caller defects and assert instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("unknown pattern {name:?} (available: {available})")]
    UnknownPattern { name: String, available: String },

    #[error("worker {rank}: ring link closed during {stage}")]
    LinkClosed { rank: usize, stage: &'static str },

    #[error("worker {rank} panicked")]
    WorkerPanicked { rank: usize },
}

pub type Result<T> = std::result::Result<T, LifeError>;
