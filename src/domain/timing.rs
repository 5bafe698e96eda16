//! Randomised duration bounds for thinking and eating.

use rand::Rng;
use std::fmt;
use std::time::Duration;

/// An inclusive range of durations to draw sleeps from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationRange {
    pub min: Duration,
    pub max: Duration,
}

impl DurationRange {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    pub fn from_millis(min: u64, max: u64) -> Self {
        Self::new(Duration::from_millis(min), Duration::from_millis(max))
    }

    /// A range that always yields `duration`.
    pub fn fixed(duration: Duration) -> Self {
        Self::new(duration, duration)
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Draws a duration uniformly from `min..=max`.
    ///
    /// An inverted range yields `min`; configs are validated before a dinner starts.
    pub fn sample(&self) -> Duration {
        if self.min >= self.max {
            return self.min;
        }
        rand::thread_rng().gen_range(self.min..=self.max)
    }
}

impl Default for DurationRange {
    fn default() -> Self {
        Self::from_millis(0, 100)
    }
}

impl fmt::Display for DurationRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}..={:?}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_stay_in_bounds() {
        let range = DurationRange::from_millis(10, 20);
        for _ in 0..1_000 {
            let d = range.sample();
            assert!(d >= range.min && d <= range.max, "{d:?} outside {range}");
        }
    }

    #[test]
    fn test_fixed_range() {
        let range = DurationRange::fixed(Duration::ZERO);
        assert!(range.is_valid());
        assert_eq!(range.sample(), Duration::ZERO);
    }

    #[test]
    fn test_inverted_range_is_invalid() {
        let range = DurationRange::from_millis(50, 10);
        assert!(!range.is_valid());
        assert_eq!(range.sample(), Duration::from_millis(50));
    }
}
