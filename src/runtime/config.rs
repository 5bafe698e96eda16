//! Dinner configuration.
//!
//! All values are fixed when [`Dinner::new`](super::Dinner::new) accepts them; a
//! running dinner never reads configuration again.

use crate::domain::DurationRange;
use crate::error::DinnerError;
use crate::philosopher::Appetite;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PHILOSOPHERS: usize = 5;
pub const DEFAULT_MEALS: u32 = 10;
pub const DEFAULT_MONITOR_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DinnerConfig {
    /// Seats at the table; also the number of chopsticks.
    pub philosophers: usize,
    /// Meals each philosopher eats before leaving.
    pub meals: u32,
    pub think: DurationRange,
    pub eat: DurationRange,
    /// Time between two monitor samples.
    pub monitor_interval: Duration,
    /// Where to copy the log output, in addition to stdout.
    pub log_file: Option<PathBuf>,
}

impl Default for DinnerConfig {
    fn default() -> Self {
        Self {
            philosophers: DEFAULT_PHILOSOPHERS,
            meals: DEFAULT_MEALS,
            think: DurationRange::default(),
            eat: DurationRange::default(),
            monitor_interval: DEFAULT_MONITOR_INTERVAL,
            log_file: None,
        }
    }
}

impl DinnerConfig {
    /// Checks the config before anything is built or spawned.
    pub fn validate(&self) -> Result<(), DinnerError> {
        if self.philosophers < 2 {
            return Err(DinnerError::InvalidConfig(format!(
                "need at least 2 philosophers, got {}",
                self.philosophers
            )));
        }
        if self.meals == 0 {
            return Err(DinnerError::InvalidConfig("meals must be at least 1".into()));
        }
        if !self.think.is_valid() {
            return Err(DinnerError::InvalidConfig(format!(
                "think range {} has min above max",
                self.think
            )));
        }
        if !self.eat.is_valid() {
            return Err(DinnerError::InvalidConfig(format!(
                "eat range {} has min above max",
                self.eat
            )));
        }
        if self.monitor_interval.is_zero() {
            return Err(DinnerError::InvalidConfig(
                "monitor interval must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn appetite(&self) -> Appetite {
        Appetite {
            meals: self.meals,
            think: self.think,
            eat: self.eat,
        }
    }
}
