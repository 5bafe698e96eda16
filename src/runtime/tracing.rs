//! # Logging setup
//!
//! Installs the global `tracing` subscriber for the binary.
//!
//! ## Configuration
//!
//! - Filtering comes from `RUST_LOG`, falling back to `info` when it is unset.
//! - Output uses the compact format without module targets.
//! - With a log file, every line goes to stdout **and** the file (truncated first),
//!   and ANSI colours are turned off so the file stays readable.
//!
//! ```bash
//! # Monitor samples and final statistics
//! cargo run
//!
//! # Every philosopher transition, inside a `philosopher{id=..}` span
//! RUST_LOG=debug cargo run -- --log-file philosophers.log
//! ```

use crate::error::DinnerError;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

pub fn setup_tracing(log_file: Option<&Path>) -> Result<(), DinnerError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact();

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(std::io::stdout.and(Mutex::new(file)))
                .try_init()
        }
        None => builder.try_init(),
    };

    installed.map_err(|e| DinnerError::Logging(e.to_string()))
}
