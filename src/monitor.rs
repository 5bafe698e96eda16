//! Periodic observer of philosopher states.
//!
//! The monitor never touches a chopstick and never waits on a philosopher. Every
//! `interval` it reads the [`StateBoard`] and emits one [`Report::State`] per seat.
//! A philosopher may change state while a sample is being taken; samples are
//! telemetry and do not need to be consistent across seats.
//!
//! The loop runs until its [`CancellationToken`] is cancelled, which the runner
//! does once every philosopher has finished.

use crate::domain::StateBoard;
use crate::report::{Report, ReportSink};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub struct Monitor {
    board: StateBoard,
    sink: Arc<dyn ReportSink>,
    interval: Duration,
}

impl Monitor {
    pub fn new(board: StateBoard, sink: Arc<dyn ReportSink>, interval: Duration) -> Self {
        Self {
            board,
            sink,
            interval,
        }
    }

    /// Emits one sample: a separator followed by every seat's current state.
    pub fn sample(&self) {
        self.sink.emit(Report::SampleStart);
        for (id, state) in self.board.snapshot().into_iter().enumerate() {
            self.sink.emit(Report::State { id, state });
        }
    }

    /// Samples every `interval` until `shutdown` is cancelled. Returns the number
    /// of samples taken.
    pub async fn run(self, shutdown: CancellationToken) -> u64 {
        debug!(interval = ?self.interval, seats = self.board.len(), "Monitor started");
        let mut samples = 0;

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = sleep(self.interval) => {
                    self.sample();
                    samples += 1;
                }
            }
        }

        debug!(samples, "Monitor stopped");
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DinerState;
    use crate::report::MemorySink;
    use tokio::time::timeout;

    #[test]
    fn test_sample_reports_every_seat() {
        let board = StateBoard::new(3);
        board.set(2, DinerState::Eating);
        let sink = Arc::new(MemorySink::new());

        Monitor::new(board, sink.clone(), Duration::from_millis(100)).sample();

        assert_eq!(
            sink.samples(),
            vec![vec![
                (0, DinerState::Thinking),
                (1, DinerState::Thinking),
                (2, DinerState::Eating),
            ]]
        );
    }

    #[tokio::test]
    async fn test_samples_periodically_until_cancelled() {
        let board = StateBoard::new(2);
        let sink = Arc::new(MemorySink::new());
        let shutdown = CancellationToken::new();

        let monitor = Monitor::new(board, sink.clone(), Duration::from_millis(10));
        let handle = tokio::spawn(monitor.run(shutdown.clone()));

        sleep(Duration::from_millis(75)).await;
        shutdown.cancel();

        let samples = timeout(Duration::from_secs(1), handle)
            .await
            .expect("monitor should stop once cancelled")
            .unwrap();

        assert!(samples >= 2, "only {samples} samples");
        assert_eq!(sink.samples().len() as u64, samples);
        assert!(sink.samples().iter().all(|s| s.len() == 2));
    }

    #[tokio::test]
    async fn test_cancelled_before_first_tick_takes_no_sample() {
        let sink = Arc::new(MemorySink::new());
        let shutdown = CancellationToken::new();
        shutdown.cancel();

        let monitor = Monitor::new(StateBoard::new(2), sink.clone(), Duration::from_secs(60));
        let samples = timeout(Duration::from_secs(1), monitor.run(shutdown))
            .await
            .unwrap();

        assert_eq!(samples, 0);
        assert!(sink.reports().is_empty());
    }
}
