//! Command-line estimator for sampled TSP tour lengths.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use tsp_montecarlo::dataset::{LoadConfig, TspDataSet};
use tsp_montecarlo::experiment::TspExperiment;
use tsp_montecarlo::montecarlo::{MonteCarloRunner, PrecisionConfig};
use tsp_montecarlo::stats::RunningStats;
use tsp_montecarlo::Result;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// City dataset: `<n>` followed by `n` records `<city> <x> <y>`.
    file: PathBuf,

    #[arg(short, long, default_value_t = 0)]
    /// Depot city, always part of every sample.
    depot: usize,

    #[arg(short, long, default_value_t = 0.6)]
    /// Probability of keeping each non-depot city.
    probability: f64,

    #[arg(short, long, default_value_t = 20200525)]
    /// Seed of the random source shared by all trials.
    seed: u64,

    #[arg(short, long, default_value_t = 0.95)]
    /// Confidence level of the reported interval.
    level: f64,

    #[arg(short, long)]
    /// Run exactly this many trials instead of the stopping rule.
    runs: Option<usize>,

    #[arg(long, default_value_t = 10.0, conflicts_with = "runs")]
    /// Target confidence-interval half-width.
    max_half_width: f64,

    #[arg(long, default_value_t = 100)]
    /// Trials run before projecting the total.
    initial_runs: usize,

    #[arg(long, default_value_t = 100)]
    /// Trials per follow-up batch.
    batch_size: usize,

    #[arg(long)]
    /// Hard cap on the total number of trials.
    max_runs: Option<usize>,

    #[arg(long)]
    /// Largest distance table to precompute, in entries.
    max_table_entries: Option<usize>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(event = "estimate_failed", error = %err);
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut load_config = LoadConfig::default();
    if let Some(entries) = args.max_table_entries {
        load_config = load_config.with_max_table_entries(entries);
    }

    let data = TspDataSet::from_path(&args.file, &load_config)?;
    let experiment = TspExperiment::new(&data, args.depot, args.probability)?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut stats = RunningStats::new();

    match args.runs {
        Some(runs) => MonteCarloRunner::run_fixed(&experiment, runs, &mut rng, &mut stats)?,
        None => {
            let mut config = PrecisionConfig::default()
                .with_level(args.level)
                .with_max_half_width(args.max_half_width)
                .with_initial_runs(args.initial_runs)
                .with_batch_size(args.batch_size);
            if let Some(cap) = args.max_runs {
                config = config.with_max_runs(cap);
            }
            let outcome =
                MonteCarloRunner::run_until_precision(&experiment, &config, &mut rng, &mut stats)?;
            if !outcome.converged {
                println!("Run cap reached before the target half-width.");
            }
        }
    }

    let summary = stats.summary(args.level)?;
    println!("**********************");
    println!("  Simulation results");
    println!("**********************");
    println!("Nb of runs : {}", summary.count);
    println!("Mean : {:.2}", summary.mean);
    match summary.half_width {
        Some(half_width) => println!(
            "C.I. ({:.0}%) : {:.2} +/- {:.2}",
            args.level * 100.0,
            summary.mean,
            half_width
        ),
        None => println!("C.I. : not available with fewer than 2 runs"),
    }

    Ok(())
}
