//! Dining philosophers CLI.
//!
//! Runs one dinner with the given settings and prints the statistics.

use clap::Parser;
use dining_philosophers::domain::DurationRange;
use dining_philosophers::runtime::{setup_tracing, Dinner, DinnerConfig};
use dining_philosophers::DinnerError;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "dining-philosophers")]
#[command(about = "Simulate philosophers contending for chopsticks around a table", long_about = None)]
struct Args {
    /// Number of philosophers (and chopsticks)
    #[arg(short = 'n', long, default_value = "5")]
    philosophers: usize,

    /// Meals each philosopher eats before leaving
    #[arg(short, long, default_value = "10")]
    meals: u32,

    /// Shortest think time in milliseconds
    #[arg(long, default_value = "0")]
    think_min_ms: u64,

    /// Longest think time in milliseconds
    #[arg(long, default_value = "100")]
    think_max_ms: u64,

    /// Shortest eat time in milliseconds
    #[arg(long, default_value = "0")]
    eat_min_ms: u64,

    /// Longest eat time in milliseconds
    #[arg(long, default_value = "100")]
    eat_max_ms: u64,

    /// Milliseconds between two monitor samples
    #[arg(long, default_value = "100")]
    monitor_ms: u64,

    /// Also write the log to this file
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Print the final statistics as JSON on stdout
    #[arg(long)]
    json: bool,
}

impl From<Args> for DinnerConfig {
    fn from(args: Args) -> Self {
        Self {
            philosophers: args.philosophers,
            meals: args.meals,
            think: DurationRange::from_millis(args.think_min_ms, args.think_max_ms),
            eat: DurationRange::from_millis(args.eat_min_ms, args.eat_max_ms),
            monitor_interval: Duration::from_millis(args.monitor_ms),
            log_file: args.log_file,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), DinnerError> {
    let args = Args::parse();
    let json = args.json;
    let config = DinnerConfig::from(args);

    setup_tracing(config.log_file.as_deref())?;

    let log_file = config.log_file.clone();
    let summary = Dinner::with_tracing(config)?.run().await?;

    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(out) => println!("{out}"),
            Err(e) => tracing::error!(error = %e, "Could not serialize summary"),
        }
    }

    if let Some(path) = log_file {
        info!("Logs saved to {}", path.display());
    }
    Ok(())
}
