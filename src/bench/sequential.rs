use tokio::sync::oneshot;
use tokio::time::Instant;
use tracing::debug;

use crate::fetch::Fetcher;

use super::report::Reporter;
use super::summary::{RunSummary, RunTally, SEQUENTIAL_LABEL, signal_done};

/// Fetches `url` `count` times back to back, then reports and signals `done` once.
pub async fn run_sequential(
    fetcher: &dyn Fetcher,
    url: &str,
    count: usize,
    reporter: &dyn Reporter,
    done: oneshot::Sender<RunSummary>,
) {
    reporter.starting(SEQUENTIAL_LABEL);
    debug!("Sequential run: {} request(s) to {}", count, url);

    let started = Instant::now();
    let mut tally = RunTally::default();
    for _ in 0..count {
        let result = fetcher.fetch(url).await;
        tally.record(&result);
    }
    let summary = tally.finish(SEQUENTIAL_LABEL, started.elapsed());

    reporter.finished(&summary);
    signal_done(done, summary);
}
