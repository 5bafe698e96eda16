//! # Dining Philosophers
//!
//! > **N philosophers, N chopsticks, one round table.**
//!
//! Each philosopher repeatedly thinks, then tries to eat. Eating needs the
//! chopstick on either side, and each chopstick is shared with a neighbour. This
//! crate runs every philosopher as its own Tokio task and reports what happens.
//!
//! ## 🍜 The Protocol
//!
//! A philosopher waits for its **left** chopstick, then only *tries* the **right**
//! one. If the right chopstick is taken it puts the left one back and goes back to
//! thinking. Nobody ever holds one chopstick while waiting for the other, which
//! rules out the classic circular-wait deadlock. It does not rule out livelock;
//! a philosopher that keeps losing the race keeps retrying. See [`philosopher`].
//!
//! ## 🏗️ Concurrency Model
//!
//! - **Philosophers** each run in a Tokio task and own their statistics. The
//!   statistics come back as the task's output, so nobody reads them while they
//!   are still being written.
//! - **Chopsticks** are `tokio::sync::Mutex<()>` held through owned guards; putting
//!   a chopstick down is dropping its guard.
//! - **States** live on a [`StateBoard`](domain::StateBoard) of atomic bytes. Each
//!   philosopher writes its own slot and the monitor reads all of them without
//!   any lock.
//! - **The monitor** samples the board on its own interval until the runner
//!   cancels it.
//! - **The runner** ([`Dinner`](runtime::Dinner)) waits on a `JoinSet` for every
//!   philosopher, which is the only barrier in the system.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Table ([`table`])
//! - **Role**: The shared resources. A [`Chopstick`](table::Chopstick) with blocking
//!   `acquire`, non-blocking `try_acquire` and guard-based release, arranged in a
//!   ring by [`Table`](table::Table).
//!
//! ### 2. The Diners ([`philosopher`], [`domain`])
//! - **Role**: The think/wait/eat state machine and the data it produces.
//! - **Key items**: [`Philosopher`](philosopher::Philosopher),
//!   [`DinerState`](domain::DinerState), [`DinnerSummary`](domain::DinnerSummary).
//!
//! ### 3. The Observer ([`monitor`], [`report`])
//! - **Role**: Periodic state samples and final statistics, delivered to a
//!   [`ReportSink`](report::ReportSink).
//!
//! ### 4. The Orchestrator ([`runtime`])
//! - **Role**: Configuration, logging setup, and the [`Dinner`](runtime::Dinner)
//!   that wires everything together.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Five philosophers, ten meals each
//! cargo run
//!
//! # Two philosophers, full transition log copied to a file
//! RUST_LOG=debug cargo run -- --philosophers 2 --log-file philosophers.log
//!
//! # Machine-readable statistics
//! cargo run -- --json
//! ```

pub mod domain;
pub mod error;
pub mod monitor;
pub mod philosopher;
pub mod report;
pub mod runtime;
pub mod table;

pub use error::DinnerError;
