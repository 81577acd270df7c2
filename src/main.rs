#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod cli;

use std::time::{Duration, Instant};

use cli::Cli;
use ring_life::presenter::{NullPresenter, TerminalPresenter};
use ring_life::{pattern, RingLife, RingLifeConfig, SeqLife};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::from_args();
    if let Err(e) = cli.validate_parameters() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    // An unknown pattern must fail before any worker starts, so the
    // abort is uniform rather than a partial launch.
    let seed = match pattern::find(&cli.pattern) {
        Ok(pattern) => pattern.build_grid(),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // generations == 0 leaves the limit unset: run until the presenter
    // reports a quit, like the source's interactive mode.
    let mut config = RingLifeConfig::default().workers(cli.workers);
    if cli.generations > 0 {
        config = config.max_generations(cli.generations);
    }

    let result = if cli.check {
        run_checked(&cli, config, seed)
    } else {
        let mut presenter = TerminalPresenter::new(
            cli.display_rows,
            cli.display_cols,
            Duration::from_millis(cli.frame_delay_ms),
        );
        RingLife::with_config(config)
            .run(&seed, &mut presenter)
            .map(|_| ())
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Evolve the same seed on the ring engine and the sequential reference
/// and report populations, agreement, and timings.
fn run_checked(
    cli: &Cli,
    config: RingLifeConfig,
    seed: ring_life::Grid,
) -> Result<(), ring_life::error::LifeError> {
    let start = Instant::now();
    let ring_final = RingLife::with_config(config).run(&seed, &mut NullPresenter)?;
    let ring_elapsed = start.elapsed();

    let start = Instant::now();
    let mut reference = SeqLife::new(seed);
    reference.step_n(cli.generations);
    let seq_elapsed = start.elapsed();

    let match_status = if ring_final == *reference.grid() {
        "MATCH"
    } else {
        "MISMATCH"
    };
    let ring_ms = ring_elapsed.as_secs_f64() * 1000.0;
    let seq_ms = seq_elapsed.as_secs_f64() * 1000.0;
    println!(
        "{} generations of {:?} on {} workers: ring pop = {}, seq pop = {} [{match_status}]",
        cli.generations,
        cli.pattern,
        cli.workers,
        ring_final.population(),
        reference.population(),
    );
    println!(
        "  ring: {ring_ms:.3} ms total, {:.6} ms/gen | seq: {seq_ms:.3} ms total, {:.6} ms/gen",
        ring_ms / cli.generations as f64,
        seq_ms / cli.generations as f64,
    );
    Ok(())
}
