//! A single chopstick: an exclusive lock identified by its position on the table.

use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// One chopstick on the table.
///
/// Cloning a `Chopstick` clones the handle, not the lock, so the two
/// philosophers on either side of it contend for the same underlying mutex.
#[derive(Clone, Debug)]
pub struct Chopstick {
    position: usize,
    lock: Arc<Mutex<()>>,
}

impl Chopstick {
    pub fn new(position: usize) -> Self {
        Self {
            position,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Position of this chopstick in the ring.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Waits until the chopstick is free and picks it up.
    pub async fn acquire(&self) -> ChopstickGuard {
        let guard = self.lock.clone().lock_owned().await;
        ChopstickGuard {
            position: self.position,
            _guard: guard,
        }
    }

    /// Picks the chopstick up if nobody holds it. Never suspends.
    pub fn try_acquire(&self) -> Option<ChopstickGuard> {
        self.lock
            .clone()
            .try_lock_owned()
            .ok()
            .map(|guard| ChopstickGuard {
                position: self.position,
                _guard: guard,
            })
    }

    /// Whether the chopstick is currently lying on the table.
    ///
    /// Only a point-in-time observation; another task may pick it up right after.
    pub fn is_free(&self) -> bool {
        self.lock.try_lock().is_ok()
    }
}

/// Proof that a chopstick is held. Dropping it (or calling [`release`](Self::release))
/// puts the chopstick back, so only the holder can ever release it.
#[must_use = "dropping the guard releases the chopstick immediately"]
#[derive(Debug)]
pub struct ChopstickGuard {
    position: usize,
    _guard: OwnedMutexGuard<()>,
}

impl ChopstickGuard {
    pub fn position(&self) -> usize {
        self.position
    }

    /// Puts the chopstick back on the table.
    pub fn release(self) {
        drop(self);
    }
}
