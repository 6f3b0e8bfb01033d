use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::fetch::{FetchResult, Fetcher};

use super::report::Reporter;
use super::summary::{CONCURRENT_LABEL, RunSummary, RunTally, signal_done};

/// One in-flight fetch and the channel its single result arrives on.
#[derive(Debug)]
pub(crate) struct PendingTask {
    index: usize,
    receiver: oneshot::Receiver<FetchResult>,
}

impl PendingTask {
    fn launch(index: usize, fetcher: Arc<dyn Fetcher>, url: Arc<str>) -> Self {
        let (sender, receiver) = oneshot::channel();
        tokio::spawn(async move {
            let result = fetcher.fetch(&url).await;
            if sender.send(result).is_err() {
                debug!("Fetch task {} finished after its receiver was dropped", index);
            }
        });
        Self { index, receiver }
    }

    /// Waits for this task's result. Consumes the task so it is read exactly once.
    async fn wait(self) -> FetchResult {
        match self.receiver.await {
            Ok(result) => result,
            Err(err) => {
                warn!("Fetch task {} ended without a result: {}", self.index, err);
                FetchResult::failed(FetchError::TaskLost, Duration::ZERO)
            }
        }
    }
}

/// Spawns one task per request; the returned tasks are in launch order.
fn launch_all(fetcher: &Arc<dyn Fetcher>, url: &Arc<str>, count: usize) -> Vec<PendingTask> {
    let mut pending = Vec::new();
    for index in 0..count {
        pending.push(PendingTask::launch(
            index,
            Arc::clone(fetcher),
            Arc::clone(url),
        ));
    }
    pending
}

/// Fans out `count` fetch tasks, then drains their channels in launch order.
///
/// Accumulation happens only here, in the runner task; the fetch tasks share
/// nothing but the fetcher.
pub async fn run_concurrent(
    fetcher: &Arc<dyn Fetcher>,
    url: &Arc<str>,
    count: usize,
    reporter: &dyn Reporter,
    done: oneshot::Sender<RunSummary>,
) {
    reporter.starting(CONCURRENT_LABEL);
    debug!("Concurrent run: {} request(s) to {}", count, url);

    let started = Instant::now();
    let pending = launch_all(fetcher, url, count);

    let mut tally = RunTally::default();
    for task in pending {
        let result = task.wait().await;
        tally.record(&result);
    }
    let summary = tally.finish(CONCURRENT_LABEL, started.elapsed());

    reporter.finished(&summary);
    signal_done(done, summary);
}
