//! Runtime orchestration.
//!
//! - [`Dinner`] - lays the table, starts the monitor and the philosophers, and
//!   waits for all of them to finish
//! - [`DinnerConfig`] - everything that can be tuned before a dinner starts
//! - [`setup_tracing`] - installs the logging subscriber used by the binary

pub mod config;
pub mod dinner;
pub mod tracing;

pub use self::config::*;
pub use self::dinner::*;
pub use self::tracing::*;
