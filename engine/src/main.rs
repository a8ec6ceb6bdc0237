//! Batch simulation entry point
//!
//! Opens a JSON file store, optionally seeds performers, runs a number of
//! `all_perform` rounds and logs the resulting standings.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use shared::{ProcessId, logging, process_info, process_warn};

use engine::{
    EarningsSource, EngineResult, FixedEarnings, JsonFileStore, Lifecycle, PerformerQueries,
    RandomIdentity, UniformEarnings,
};

/// Run performer simulation rounds against a JSON file store
#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(about = "Runs batch performances for every stored performer")]
struct Args {
    /// Performer snapshot file
    #[arg(long, env = "DATA_FILE")]
    data_file: PathBuf,

    /// Number of all-perform rounds to run
    #[arg(long, default_value = "1")]
    rounds: u32,

    /// Performers to create before the first round
    #[arg(long, default_value = "0")]
    seed: usize,

    /// Pin gross earnings instead of drawing them at random
    #[arg(long)]
    fixed_earnings: Option<i64>,

    /// How many of the richest performers to report
    #[arg(long, default_value = "5")]
    top: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> EngineResult<()> {
    let _ = dotenv::dotenv();
    let args = Args::parse();

    ProcessId::init_simulator();
    logging::init_tracing(Some(&args.log_level));
    logging::log_startup(ProcessId::current(), &format!("simulation on {}", args.data_file.display()));

    let store = Arc::new(JsonFileStore::open(&args.data_file).await?);
    let earnings: Arc<dyn EarningsSource> = match args.fixed_earnings {
        Some(gross) => Arc::new(FixedEarnings(gross)),
        None => Arc::new(UniformEarnings::default()),
    };
    let lifecycle = Lifecycle::new(store.clone(), earnings, Arc::new(RandomIdentity));
    let queries = PerformerQueries::new(store);

    if args.seed > 0 {
        let created = lifecycle.seed(args.seed).await?;
        logging::log_progress(ProcessId::current(), "Seeded", &format!("{} performers", created.len()));
    }

    for round in 1..=args.rounds {
        let report = lifecycle.all_perform().await?;
        logging::log_progress(
            ProcessId::current(),
            &format!("Round {round}/{}", args.rounds),
            &format!(
                "{} performed, {} failed, net {}",
                report.performed.len(),
                report.failed.len(),
                report.net_earned()
            ),
        );
        for failure in &report.failed {
            process_warn!(ProcessId::current(), "⚠️ {} did not perform: {}", failure.id, failure.error);
        }
    }

    for (rank, performer) in queries.top(Some(args.top)).await?.iter().enumerate() {
        process_info!(
            ProcessId::current(),
            "🏆 #{} {} worth {} ({} performances)",
            rank + 1,
            performer.name().unwrap_or_default(),
            performer.worth(),
            performer.history().len()
        );
    }

    logging::log_success(ProcessId::current(), "Simulation finished");
    Ok(())
}
