//! Error types for the dinner runtime.
//!
//! A philosopher that cannot pick up its right chopstick is *not* an error: it
//! puts the left one back and thinks again. The variants here cover the few
//! things that actually stop a dinner from running.

use thiserror::Error;

/// Errors that can occur while setting up or running a dinner.
#[derive(Debug, Error)]
pub enum DinnerError {
    /// The configuration was rejected before any task was spawned.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A philosopher task panicked or was aborted.
    #[error("Philosopher task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),

    /// The log file could not be opened.
    #[error("Log file error: {0}")]
    Io(#[from] std::io::Error),

    /// The global tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}
