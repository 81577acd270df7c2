use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Row-banded Conway's Game of Life over a ring of lockstep workers"
)]
pub struct Cli {
    /// Seed pattern name (see the catalogue in the pattern module).
    #[arg(long, default_value = "glider")]
    pub pattern: String,

    /// Number of ring workers.
    #[arg(long, default_value = "4")]
    pub workers: usize,

    /// Stop after this many generations; 0 runs until the presenter
    /// requests termination.
    #[arg(long, default_value = "200")]
    pub generations: u64,

    // Display settings
    #[arg(long, default_value = "40")]
    pub display_rows: usize,
    #[arg(long, default_value = "80")]
    pub display_cols: usize,
    /// Delay between rendered frames, in milliseconds.
    #[arg(long, default_value = "40")]
    pub frame_delay_ms: u64,

    /// Race the ring engine against the sequential reference instead of
    /// rendering.
    #[arg(long)]
    pub check: bool,
}

impl Cli {
    pub fn from_args() -> Self {
        Self::parse()
    }

    pub fn validate_parameters(&self) -> Result<(), String> {
        if self.workers == 0 {
            return Err("at least one worker is required".to_string());
        }
        if self.display_rows == 0 || self.display_cols == 0 {
            return Err("display dimensions must be positive".to_string());
        }
        if self.check && self.generations == 0 {
            return Err("check mode needs a bounded generation count".to_string());
        }
        Ok(())
    }
}
