use std::fmt;
use std::time::Duration;

use tokio::sync::oneshot;
use tracing::debug;

use crate::fetch::FetchResult;

pub const SEQUENTIAL_LABEL: &str = "Sequential";
pub const CONCURRENT_LABEL: &str = "Concurrent";

/// Totals for one runner, produced once after its last fetch resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub label: &'static str,
    pub requests: u64,
    pub total_bytes: u64,
    pub failures: u64,
    pub elapsed: Duration,
    pub mean_latency: Option<Duration>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} bytes in {:?}",
            self.label, self.total_bytes, self.elapsed
        )
    }
}

/// Running totals owned by exactly one runner task.
#[derive(Debug, Default)]
pub(crate) struct RunTally {
    requests: u64,
    total_bytes: u64,
    failures: u64,
    total_latency: Duration,
}

impl RunTally {
    pub(crate) fn record(&mut self, result: &FetchResult) {
        self.requests = self.requests.saturating_add(1);
        self.total_bytes = self.total_bytes.saturating_add(result.bytes);
        self.total_latency = self.total_latency.saturating_add(result.latency);
        if result.is_failure() {
            self.failures = self.failures.saturating_add(1);
        }
    }

    pub(crate) fn finish(self, label: &'static str, elapsed: Duration) -> RunSummary {
        let mean_latency = u32::try_from(self.requests)
            .ok()
            .and_then(|requests| self.total_latency.checked_div(requests));
        RunSummary {
            label,
            requests: self.requests,
            total_bytes: self.total_bytes,
            failures: self.failures,
            elapsed,
            mean_latency,
        }
    }
}

pub(crate) fn signal_done(done: oneshot::Sender<RunSummary>, summary: RunSummary) {
    if let Err(summary) = done.send(summary) {
        debug!("{} completion was not awaited", summary.label);
    }
}
