//! # The Philosopher
//!
//! A philosopher alternates between thinking and eating until it has eaten
//! [`Appetite::meals`] times. Eating needs both neighbouring chopsticks.
//!
//! ## Picking up chopsticks
//!
//! 1. Mark the seat `Waiting` and start the wait clock.
//! 2. Wait for the **left** chopstick (this may suspend).
//! 3. *Try* the **right** chopstick without waiting.
//!    - Taken: put the left one back and give up on this meal. Nothing is added to
//!      the wait or eat totals; the next loop iteration thinks and tries again.
//!    - Free: stop the wait clock, mark the seat `Eating`, eat, put both back.
//!
//! No philosopher ever holds one chopstick while waiting for the other, so the
//! ring cannot deadlock. It can still livelock under unlucky scheduling. Nothing
//! here detects that: a stalled philosopher simply keeps retrying.

use crate::domain::{DinerState, DinerStats, DurationRange, StateBoard};
use crate::report::{Report, ReportSink};
use crate::table::{Chopstick, Table};
use std::sync::Arc;
use tokio::time::{sleep, Instant};
use tracing::debug;

/// How much and how long a philosopher eats and thinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appetite {
    pub meals: u32,
    pub think: DurationRange,
    pub eat: DurationRange,
}

impl Default for Appetite {
    fn default() -> Self {
        Self {
            meals: 10,
            think: DurationRange::default(),
            eat: DurationRange::default(),
        }
    }
}

/// Outcome of one attempt to eat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    Ate,
    RightTaken,
}

/// One diner at the table.
pub struct Philosopher {
    id: usize,
    left: Chopstick,
    right: Chopstick,
    board: StateBoard,
    sink: Arc<dyn ReportSink>,
    appetite: Appetite,
    stats: DinerStats,
}

impl Philosopher {
    /// Seats a philosopher at `seat`, with chopsticks `seat` and `seat + 1` (mod n).
    pub fn new(
        seat: usize,
        table: &Table,
        board: StateBoard,
        sink: Arc<dyn ReportSink>,
        appetite: Appetite,
    ) -> Self {
        let (left, right) = table.place_setting(seat);
        board.set(seat, DinerState::Thinking);
        Self {
            id: seat,
            left,
            right,
            board,
            sink,
            appetite,
            stats: DinerStats::new(seat),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Thinks and eats until the meal target is reached, then reports done.
    ///
    /// Consumes the philosopher and hands back its statistics; they are only ever
    /// read after this returns.
    pub async fn dine(mut self) -> DinerStats {
        debug!(left = self.left.position(), right = self.right.position(), "Sat down");

        while self.stats.meals < self.appetite.meals {
            self.think().await;
            if self.eat().await == Attempt::RightTaken {
                self.stats.retries += 1;
                // Let whoever holds our right chopstick finish before we try again.
                tokio::task::yield_now().await;
            }
        }

        self.set_state(DinerState::Done);
        debug!(meals = self.stats.meals, retries = self.stats.retries, "Done eating");
        self.sink.emit(Report::Finished { id: self.id });
        self.stats
    }

    async fn think(&mut self) {
        self.set_state(DinerState::Thinking);
        let started = Instant::now();
        sleep(self.appetite.think.sample()).await;
        self.stats.think += started.elapsed();
        debug!("Thinking");
    }

    async fn eat(&mut self) -> Attempt {
        self.set_state(DinerState::Waiting);
        debug!("Waiting");
        let waiting_since = Instant::now();

        let left = self.left.acquire().await;
        let Some(right) = self.right.try_acquire() else {
            left.release();
            debug!(chopstick = self.right.position(), "Right chopstick taken");
            return Attempt::RightTaken;
        };
        self.stats.wait += waiting_since.elapsed();

        self.set_state(DinerState::Eating);
        debug!("Eating");
        let started = Instant::now();
        sleep(self.appetite.eat.sample()).await;
        self.stats.eat += started.elapsed();
        self.stats.meals += 1;

        left.release();
        right.release();
        Attempt::Ate
    }

    fn set_state(&self, state: DinerState) {
        self.board.set(self.id, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemorySink;
    use std::time::Duration;
    use tokio::time::timeout;

    fn quick(meals: u32) -> Appetite {
        Appetite {
            meals,
            think: DurationRange::fixed(Duration::ZERO),
            eat: DurationRange::fixed(Duration::ZERO),
        }
    }

    #[tokio::test]
    async fn test_uncontended_philosopher_eats_exactly_target() {
        let table = Table::new(2);
        let board = StateBoard::new(2);
        let sink = Arc::new(MemorySink::new());

        let philosopher = Philosopher::new(0, &table, board.clone(), sink.clone(), quick(7));
        let stats = philosopher.dine().await;

        assert_eq!(stats.id, 0);
        assert_eq!(stats.meals, 7);
        assert_eq!(stats.retries, 0);
        assert_eq!(board.get(0), DinerState::Done);
        assert_eq!(sink.finished(), vec![0]);
        assert!(table.all_free());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_gives_up_while_right_chopstick_is_held() {
        let table = Table::new(2);
        let board = StateBoard::new(2);
        let sink = Arc::new(MemorySink::new());

        // Seat 0's right chopstick is seat 1's left one.
        let (_, right) = table.place_setting(0);
        let held = right.acquire().await;

        let philosopher = Philosopher::new(0, &table, board.clone(), sink.clone(), quick(1));
        let handle = tokio::spawn(philosopher.dine());

        sleep(Duration::from_millis(30)).await;
        assert_ne!(board.get(0), DinerState::Eating);
        assert_ne!(board.get(0), DinerState::Done);
        assert!(sink.finished().is_empty());

        held.release();
        let stats = timeout(Duration::from_secs(5), handle)
            .await
            .expect("philosopher should finish once the chopstick is free")
            .unwrap();

        assert_eq!(stats.meals, 1);
        assert!(stats.retries >= 1);
        assert!(table.all_free());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_wait_time_includes_blocking_on_left() {
        let table = Table::new(2);
        let board = StateBoard::new(2);
        let sink = Arc::new(MemorySink::new());

        let (left, _) = table.place_setting(0);
        let held = left.acquire().await;

        let philosopher = Philosopher::new(0, &table, board.clone(), sink, quick(1));
        let handle = tokio::spawn(philosopher.dine());

        sleep(Duration::from_millis(40)).await;
        assert_eq!(board.get(0), DinerState::Waiting);
        held.release();

        let stats = timeout(Duration::from_secs(5), handle).await.unwrap().unwrap();
        assert_eq!(stats.meals, 1);
        assert_eq!(stats.retries, 0);
        assert!(stats.wait >= Duration::from_millis(20), "wait was {:?}", stats.wait);
    }

    #[tokio::test]
    async fn test_think_and_eat_time_accumulate() {
        let table = Table::new(2);
        let board = StateBoard::new(2);
        let appetite = Appetite {
            meals: 3,
            think: DurationRange::fixed(Duration::from_millis(5)),
            eat: DurationRange::fixed(Duration::from_millis(5)),
        };

        let stats = Philosopher::new(1, &table, board, Arc::new(MemorySink::new()), appetite)
            .dine()
            .await;

        assert_eq!(stats.meals, 3);
        assert!(stats.think >= Duration::from_millis(15));
        assert!(stats.eat >= Duration::from_millis(15));
    }
}
