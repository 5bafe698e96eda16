//! In-memory sink for tests.
//!
//! Records every report in order so a test can check what a dinner said without
//! capturing log output.
//!
//! ```rust
//! use dining_philosophers::report::{MemorySink, Report, ReportSink};
//!
//! let sink = MemorySink::new();
//! sink.emit(Report::Finished { id: 0 });
//! assert_eq!(sink.reports(), vec![Report::Finished { id: 0 }]);
//! ```

use super::{Report, ReportSink};
use crate::domain::DinerState;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
pub struct MemorySink {
    reports: Mutex<Vec<Report>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far, in emission order.
    pub fn reports(&self) -> Vec<Report> {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The monitor samples, each as the `(id, state)` pairs that followed a
    /// [`Report::SampleStart`].
    pub fn samples(&self) -> Vec<Vec<(usize, DinerState)>> {
        let mut samples: Vec<Vec<(usize, DinerState)>> = Vec::new();
        for report in self.reports() {
            match report {
                Report::SampleStart => samples.push(Vec::new()),
                Report::State { id, state } => {
                    if let Some(current) = samples.last_mut() {
                        current.push((id, state));
                    }
                }
                _ => {}
            }
        }
        samples
    }

    /// Ids from [`Report::Finished`], in the order philosophers finished.
    pub fn finished(&self) -> Vec<usize> {
        self.reports()
            .into_iter()
            .filter_map(|r| match r {
                Report::Finished { id } => Some(id),
                _ => None,
            })
            .collect()
    }
}

impl ReportSink for MemorySink {
    fn emit(&self, report: Report) {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(report);
    }
}
