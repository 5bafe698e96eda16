//! Plain data shared across the dinner: states, timing bounds and statistics.

pub mod state;
pub mod stats;
pub mod timing;

pub use state::{DinerState, StateBoard};
pub use stats::{Averages, DinerStats, DinnerSummary};
pub use timing::DurationRange;
