//! # Reporting
//!
//! Everything a dinner wants to tell the outside world goes through a [`ReportSink`]
//! as a [`Report`] value. The core never formats or writes output itself.
//!
//! - [`TracingSink`] turns reports into `tracing` events, so timestamps, filtering
//!   and destinations (stdout, a log file) are decided by the subscriber.
//! - [`MemorySink`] keeps reports in memory for assertions in tests.
//!
//! The `Display` impl on [`Report`] defines the line format:
//!
//! ```text
//! ------------------------
//! actor 0: Thinking
//! actor 1: Eating
//! ...
//! ------------ Dinner Done ------------
//! actor 0: think=512.3ms, wait=20.1µs, eat=498.7ms
//! average: think=..., wait=..., eat=...
//! ```

pub mod memory;
pub mod tracing_sink;

pub use memory::MemorySink;
pub use tracing_sink::TracingSink;

use crate::domain::{Averages, DinerState, DinerStats};
use std::fmt;

/// One observable event of a dinner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Separator emitted before each monitor sample.
    SampleStart,
    /// A philosopher's state as read by the monitor.
    State { id: usize, state: DinerState },
    /// A philosopher finished its last meal.
    Finished { id: usize },
    /// Every philosopher has finished.
    DinnerDone,
    /// Final statistics of one philosopher.
    Stats(DinerStats),
    /// Mean statistics across the table.
    Averages(Averages),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::SampleStart => f.write_str("------------------------"),
            Report::State { id, state } => write!(f, "actor {id}: {state}"),
            Report::Finished { id } => write!(f, "actor {id}: done eating"),
            Report::DinnerDone => f.write_str("------------ Dinner Done ------------"),
            Report::Stats(s) => write!(
                f,
                "actor {}: think={:?}, wait={:?}, eat={:?}",
                s.id, s.think, s.wait, s.eat
            ),
            Report::Averages(a) => write!(
                f,
                "average: think={:?}, wait={:?}, eat={:?}",
                a.think, a.wait, a.eat
            ),
        }
    }
}

/// Consumer of dinner reports.
///
/// Called from philosopher tasks, the monitor task and the runner, so
/// implementations must be cheap and must not block on async work.
pub trait ReportSink: Send + Sync {
    fn emit(&self, report: Report);
}
