//! The table: a fixed ring of chopsticks.
//!
//! Seat `i` eats with chopstick `i` on its left and chopstick `(i + 1) % n` on its
//! right, so every chopstick is shared by exactly two neighbouring seats. The ring
//! is built once and never changes.

pub mod chopstick;

pub use chopstick::{Chopstick, ChopstickGuard};

/// The ring of chopsticks, owned by the runner and indexed by position.
#[derive(Debug)]
pub struct Table {
    chopsticks: Vec<Chopstick>,
}

impl Table {
    pub fn new(seats: usize) -> Self {
        Self {
            chopsticks: (0..seats).map(Chopstick::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chopsticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chopsticks.is_empty()
    }

    pub fn chopsticks(&self) -> &[Chopstick] {
        &self.chopsticks
    }

    /// Returns the `(left, right)` chopsticks for `seat`.
    ///
    /// # Panics
    ///
    /// Panics if `seat` is not a seat at this table.
    pub fn place_setting(&self, seat: usize) -> (Chopstick, Chopstick) {
        let n = self.chopsticks.len();
        assert!(seat < n, "seat {seat} out of range for a table of {n}");
        (
            self.chopsticks[seat].clone(),
            self.chopsticks[(seat + 1) % n].clone(),
        )
    }

    /// Whether every chopstick is back on the table.
    pub fn all_free(&self) -> bool {
        self.chopsticks.iter().all(Chopstick::is_free)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_wiring() {
        let table = Table::new(5);
        assert_eq!(table.len(), 5);

        for seat in 0..5 {
            let (left, right) = table.place_setting(seat);
            assert_eq!(left.position(), seat);
            assert_eq!(right.position(), (seat + 1) % 5);

            // My right chopstick is my right-hand neighbour's left one.
            let (neighbour_left, _) = table.place_setting((seat + 1) % 5);
            assert_eq!(right.position(), neighbour_left.position());
        }
    }

    #[tokio::test]
    async fn test_neighbours_contend_for_shared_chopstick() {
        let table = Table::new(2);
        let (_, right_of_0) = table.place_setting(0);
        let (left_of_1, _) = table.place_setting(1);

        let held = right_of_0.acquire().await;
        assert!(left_of_1.try_acquire().is_none());
        assert!(!table.all_free());

        held.release();
        assert!(table.all_free());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_place_setting_rejects_unknown_seat() {
        Table::new(3).place_setting(3);
    }
}
