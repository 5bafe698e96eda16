//! Per-philosopher timing statistics and the dinner summary.

use serde::{Serialize, Serializer};
use std::time::Duration;

fn as_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_nanos() as f64 / 1_000_000.0)
}

/// What one philosopher did over the whole dinner.
///
/// Written only by the philosopher's own task, and handed to the runner as the
/// task's output once the philosopher is done.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DinerStats {
    pub id: usize,
    pub meals: u32,
    #[serde(serialize_with = "as_millis")]
    pub think: Duration,
    #[serde(serialize_with = "as_millis")]
    pub wait: Duration,
    #[serde(serialize_with = "as_millis")]
    pub eat: Duration,
    /// Eat attempts abandoned because the right chopstick was taken.
    pub retries: u64,
}

impl DinerStats {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn total(&self) -> Duration {
        self.think + self.wait + self.eat
    }
}

/// Mean think/wait/eat time across all philosophers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Averages {
    #[serde(serialize_with = "as_millis")]
    pub think: Duration,
    #[serde(serialize_with = "as_millis")]
    pub wait: Duration,
    #[serde(serialize_with = "as_millis")]
    pub eat: Duration,
}

impl Averages {
    /// Sums each accumulator and divides by the number of diners, in whole nanoseconds.
    pub fn of(diners: &[DinerStats]) -> Self {
        let Ok(count) = u32::try_from(diners.len()) else {
            return Self::default();
        };
        if count == 0 {
            return Self::default();
        }

        let (think, wait, eat) = diners.iter().fold(
            (Duration::ZERO, Duration::ZERO, Duration::ZERO),
            |(think, wait, eat), d| (think + d.think, wait + d.wait, eat + d.eat),
        );

        Self {
            think: think / count,
            wait: wait / count,
            eat: eat / count,
        }
    }
}

/// Final result of a dinner: every philosopher's stats, ordered by seat.
#[derive(Debug, Clone, Serialize)]
pub struct DinnerSummary {
    pub diners: Vec<DinerStats>,
    pub averages: Averages,
}

impl DinnerSummary {
    pub fn new(mut diners: Vec<DinerStats>) -> Self {
        diners.sort_by_key(|d| d.id);
        let averages = Averages::of(&diners);
        Self { diners, averages }
    }

    pub fn total_meals(&self) -> u64 {
        self.diners.iter().map(|d| u64::from(d.meals)).sum()
    }

    pub fn total_retries(&self) -> u64 {
        self.diners.iter().map(|d| d.retries).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(id: usize, think_ms: u64, wait_ms: u64, eat_ms: u64) -> DinerStats {
        DinerStats {
            id,
            meals: 10,
            think: Duration::from_millis(think_ms),
            wait: Duration::from_millis(wait_ms),
            eat: Duration::from_millis(eat_ms),
            retries: 0,
        }
    }

    #[test]
    fn test_averages_are_sum_over_count() {
        let diners = vec![stats(0, 100, 10, 50), stats(1, 200, 20, 70), stats(2, 301, 0, 0)];
        let averages = Averages::of(&diners);

        assert_eq!(averages.think, Duration::from_millis(601) / 3);
        assert_eq!(averages.wait, Duration::from_millis(10));
        assert_eq!(averages.eat, Duration::from_millis(40));
    }

    #[test]
    fn test_averages_of_nobody() {
        assert_eq!(Averages::of(&[]), Averages::default());
    }

    #[test]
    fn test_summary_orders_by_seat() {
        let summary = DinnerSummary::new(vec![stats(2, 1, 1, 1), stats(0, 1, 1, 1), stats(1, 1, 1, 1)]);
        let ids: Vec<usize> = summary.diners.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(summary.total_meals(), 30);
        assert_eq!(summary.diners[0].total(), Duration::from_millis(3));
    }

    #[test]
    fn test_summary_serializes_durations_as_millis() {
        let summary = DinnerSummary::new(vec![stats(0, 12, 0, 3)]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["diners"][0]["think"], 12.0);
        assert_eq!(json["averages"]["eat"], 3.0);
        assert_eq!(json["diners"][0]["meals"], 10);
    }
}
