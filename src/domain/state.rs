//! Philosopher states and the board the monitor reads them from.

use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Where a philosopher is in its think/eat cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum DinerState {
    Thinking = 0,
    Waiting = 1,
    Eating = 2,
    Done = 3,
}

impl DinerState {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => DinerState::Thinking,
            1 => DinerState::Waiting,
            2 => DinerState::Eating,
            _ => DinerState::Done,
        }
    }
}

impl fmt::Display for DinerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DinerState::Thinking => "Thinking",
            DinerState::Waiting => "Waiting",
            DinerState::Eating => "Eating",
            DinerState::Done => "Done",
        };
        f.write_str(name)
    }
}

/// One state slot per seat, shared between the philosophers and the monitor.
///
/// Each slot is written only by the philosopher sitting at that seat and read by
/// the monitor. Reads are advisory telemetry and never drive control flow, so a
/// single relaxed atomic byte per seat is enough; no lock sits on this path.
#[derive(Clone, Debug)]
pub struct StateBoard {
    slots: Arc<[AtomicU8]>,
}

impl StateBoard {
    /// Creates a board with every seat `Thinking`.
    pub fn new(seats: usize) -> Self {
        Self {
            slots: (0..seats)
                .map(|_| AtomicU8::new(DinerState::Thinking as u8))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn set(&self, seat: usize, state: DinerState) {
        self.slots[seat].store(state as u8, Ordering::Relaxed);
    }

    pub fn get(&self, seat: usize) -> DinerState {
        DinerState::from_u8(self.slots[seat].load(Ordering::Relaxed))
    }

    /// Reads every seat in order. Not an atomic snapshot across seats.
    pub fn snapshot(&self) -> Vec<DinerState> {
        (0..self.slots.len()).map(|seat| self.get(seat)).collect()
    }
}
