#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use perc::PercolationStats;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Estimates the percolation threshold of an n-by-n grid.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// Grid side length.
    n: usize,

    /// Number of independent trials.
    trials: usize,

    /// Seed for a reproducible run.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run every trial on the current thread.
    #[arg(long)]
    sequential: bool,

    #[arg(short, long, default_value_t = 1)]
    log_level: usize,
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    stderrlog::new()
        .verbosity(args.log_level)
        .module(module_path!())
        .module("perc")
        .init()
        .context("failed to initialize logging")?;

    let stats = run(&args)?;
    log::info!("finished {} trials", stats.trials());

    print!("{}", report(&stats));

    Ok(())
}

fn run(args: &Arguments) -> Result<PercolationStats> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if args.sequential {
        PercolationStats::new(args.n, args.trials, &mut rng)
    } else {
        let master = rng.gen::<u64>();
        PercolationStats::new_parallel(args.n, args.trials, |trial| {
            StdRng::seed_from_u64(trial_seed(master, trial))
        })
    }
    .with_context(|| {
        format!(
            "cannot run {} trials on a {}x{} grid",
            args.trials, args.n, args.n
        )
    })
}

/// SplitMix64 step over the trial index, so neighbouring trials get
/// unrelated seeds.
fn trial_seed(master: u64, trial: usize) -> u64 {
    let step = (trial as u64).wrapping_add(1);
    let mut z = master.wrapping_add(step.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn report(stats: &PercolationStats) -> String {
    format!(
        "{:<23} = {:.6}\n{:<23} = {:.17}\n{:<23} = [{:.16}, {:.16}]\n",
        "mean",
        stats.mean(),
        "stddev",
        stats.stddev(),
        "95% confidence interval",
        stats.confidence_lo(),
        stats.confidence_hi()
    )
}

////////////////////////////////////////////////////////////////////////////////
