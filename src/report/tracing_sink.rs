use super::{Report, ReportSink};
use tracing::info;

/// Writes every report as an `info` event on the `report` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn emit(&self, report: Report) {
        match &report {
            Report::Stats(stats) => {
                info!(
                    target: "report",
                    id = stats.id,
                    meals = stats.meals,
                    retries = stats.retries,
                    "{report}"
                );
            }
            _ => info!(target: "report", "{report}"),
        }
    }
}
