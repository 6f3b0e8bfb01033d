use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::fetch::{FetchResult, Fetcher};

use super::report::Reporter;
use super::summary::RunSummary;

/// Returns the same byte count for every call after an optional delay.
#[derive(Debug, Default)]
pub(super) struct FixedFetcher {
    pub(super) bytes: u64,
    pub(super) delay: Duration,
    pub(super) calls: AtomicUsize,
}

impl FixedFetcher {
    pub(super) fn new(bytes: u64, delay: Duration) -> Self {
        Self {
            bytes,
            delay,
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for FixedFetcher {
    async fn fetch(&self, _url: &str) -> FetchResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        FetchResult::succeeded(self.bytes, self.delay)
    }
}

/// The n-th call (0-based) returns `n + 1` bytes after `(total - n) * step`,
/// so later calls finish first.
#[derive(Debug)]
pub(super) struct ReversedFetcher {
    pub(super) total: usize,
    pub(super) step: Duration,
    pub(super) calls: AtomicUsize,
    pub(super) completion_order: Mutex<Vec<usize>>,
}

impl ReversedFetcher {
    pub(super) fn new(total: usize, step: Duration) -> Self {
        Self {
            total,
            step,
            calls: AtomicUsize::new(0),
            completion_order: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn completion_order(&self) -> Result<Vec<usize>, String> {
        self.completion_order
            .lock()
            .map(|order| order.clone())
            .map_err(|err| format!("completion order lock poisoned: {}", err))
    }
}

#[async_trait]
impl Fetcher for ReversedFetcher {
    async fn fetch(&self, _url: &str) -> FetchResult {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let remaining = u32::try_from(self.total.saturating_sub(call)).unwrap_or(u32::MAX);
        let delay = self.step.saturating_mul(remaining);
        tokio::time::sleep(delay).await;
        if let Ok(mut order) = self.completion_order.lock() {
            order.push(call);
        }
        let bytes = u64::try_from(call.saturating_add(1)).unwrap_or(u64::MAX);
        FetchResult::succeeded(bytes, delay)
    }
}

/// Every `fail_every`-th call (1-based) fails with a transport error; others return `bytes`.
///
/// The error is real: the request targets an unparsable URL, so the client
/// rejects it before touching the network.
#[derive(Debug)]
pub(super) struct FlakyFetcher {
    pub(super) bytes: u64,
    pub(super) fail_every: usize,
    pub(super) calls: AtomicUsize,
    client: reqwest::Client,
}

impl FlakyFetcher {
    pub(super) fn new(bytes: u64, fail_every: usize) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| format!("client build failed: {}", err))?;
        Ok(Self {
            bytes,
            fail_every,
            calls: AtomicUsize::new(0),
            client,
        })
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for FlakyFetcher {
    async fn fetch(&self, _url: &str) -> FetchResult {
        let call = self.calls.fetch_add(1, Ordering::SeqCst).saturating_add(1);
        if call.checked_rem(self.fail_every) == Some(0) {
            return match self.client.get("not a url").send().await {
                Ok(_) => FetchResult::succeeded(0, Duration::ZERO),
                Err(source) => {
                    FetchResult::failed(FetchError::Transport { source }, Duration::ZERO)
                }
            };
        }
        FetchResult::succeeded(self.bytes, Duration::ZERO)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ReportEvent {
    Starting(&'static str),
    Finished(RunSummary),
}

/// Collects reporter events instead of printing them.
#[derive(Debug, Default)]
pub(super) struct RecordingReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl RecordingReporter {
    pub(super) fn events(&self) -> Result<Vec<ReportEvent>, String> {
        self.events
            .lock()
            .map(|events| events.clone())
            .map_err(|err| format!("reporter lock poisoned: {}", err))
    }

    fn push(&self, event: ReportEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Reporter for RecordingReporter {
    fn starting(&self, label: &'static str) {
        self.push(ReportEvent::Starting(label));
    }

    fn finished(&self, summary: &RunSummary) {
        self.push(ReportEvent::Finished(summary.clone()));
    }
}
