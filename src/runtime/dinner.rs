use crate::domain::{DinnerSummary, StateBoard};
use crate::error::DinnerError;
use crate::monitor::Monitor;
use crate::philosopher::Philosopher;
use crate::report::{Report, ReportSink, TracingSink};
use crate::runtime::DinnerConfig;
use crate::table::Table;
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, info_span, Instrument};

/// The runner: sets the table, seats everyone, and waits for the last meal.
///
/// `Dinner` is responsible for:
/// - **Wiring**: building the chopstick ring and giving seat `i` chopsticks `i`
///   and `(i + 1) % n`
/// - **Lifecycle**: starting the monitor and one task per philosopher, and
///   stopping the monitor once everyone is done
/// - **Aggregation**: collecting each philosopher's statistics and reporting the
///   per-seat and average times
///
/// # Example
///
/// ```ignore
/// let dinner = Dinner::new(DinnerConfig::default(), Arc::new(TracingSink))?;
/// let summary = dinner.run().await?;
/// assert_eq!(summary.total_meals(), 50);
/// ```
pub struct Dinner {
    config: DinnerConfig,
    sink: Arc<dyn ReportSink>,
}

impl Dinner {
    /// Validates `config`. Nothing is built or spawned if it is rejected.
    pub fn new(config: DinnerConfig, sink: Arc<dyn ReportSink>) -> Result<Self, DinnerError> {
        config.validate()?;
        Ok(Self { config, sink })
    }

    /// A dinner that reports through `tracing`.
    pub fn with_tracing(config: DinnerConfig) -> Result<Self, DinnerError> {
        Self::new(config, Arc::new(TracingSink))
    }

    pub fn config(&self) -> &DinnerConfig {
        &self.config
    }

    /// Runs the dinner to completion.
    ///
    /// This method:
    /// 1. Builds the chopstick ring and seats one philosopher per chopstick
    /// 2. Starts the monitor with a cancellation token
    /// 3. Spawns every philosopher in its own task
    /// 4. Waits until each philosopher task has finished, in whatever order
    /// 5. Cancels the monitor, then reports per-seat and average statistics
    ///
    /// # Errors
    ///
    /// Returns [`DinnerError::TaskFailed`] if a philosopher or the monitor panics.
    /// The remaining philosophers are aborted in that case.
    pub async fn run(self) -> Result<DinnerSummary, DinnerError> {
        let seats = self.config.philosophers;
        let appetite = self.config.appetite();
        info!(
            philosophers = seats,
            meals = appetite.meals,
            think = %appetite.think,
            eat = %appetite.eat,
            "Dinner starting"
        );

        // =====================================================================
        // 1. Lay the table
        // =====================================================================

        let table = Table::new(seats);
        let board = StateBoard::new(seats);
        let philosophers: Vec<Philosopher> = (0..seats)
            .map(|seat| Philosopher::new(seat, &table, board.clone(), self.sink.clone(), appetite))
            .collect();

        // =====================================================================
        // 2. Start the monitor, then the philosophers
        // =====================================================================

        let shutdown = CancellationToken::new();
        let monitor = Monitor::new(board, self.sink.clone(), self.config.monitor_interval);
        let monitor_handle = tokio::spawn(monitor.run(shutdown.clone()));

        let mut diners = JoinSet::new();
        for philosopher in philosophers {
            let span = info_span!("philosopher", id = philosopher.id());
            diners.spawn(philosopher.dine().instrument(span));
        }

        // =====================================================================
        // 3. Completion barrier
        // =====================================================================

        // Each task yields its result exactly once, so every seat is counted once.
        let mut finished = Vec::with_capacity(seats);
        while let Some(joined) = diners.join_next().await {
            match joined {
                Ok(stats) => {
                    debug!(id = stats.id, remaining = diners.len(), "Philosopher left the table");
                    finished.push(stats);
                }
                Err(e) => {
                    error!(error = %e, "Philosopher task failed");
                    shutdown.cancel();
                    return Err(e.into());
                }
            }
        }

        shutdown.cancel();
        let samples = monitor_handle.await?;
        debug!(samples, chopsticks_free = table.all_free(), "Monitor joined");

        // =====================================================================
        // 4. Report
        // =====================================================================

        let summary = DinnerSummary::new(finished);
        self.sink.emit(Report::DinnerDone);
        for stats in &summary.diners {
            self.sink.emit(Report::Stats(stats.clone()));
        }
        self.sink.emit(Report::Averages(summary.averages));

        info!(
            meals = summary.total_meals(),
            retries = summary.total_retries(),
            "Dinner finished"
        );
        Ok(summary)
    }
}
