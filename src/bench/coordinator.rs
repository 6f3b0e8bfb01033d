use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::{debug, info};
use url::Url;

use crate::args::BenchArgs;
use crate::args::parsers::check_request_count;
use crate::error::{AppError, AppResult, BenchError, ValidationError};
use crate::fetch::{ClientSettings, Fetcher, HttpFetcher};

use super::concurrent::run_concurrent;
use super::report::Reporter;
use super::sequential::run_sequential;
use super::summary::{CONCURRENT_LABEL, RunSummary, SEQUENTIAL_LABEL};

/// Everything one benchmark needs; passed in explicitly so runs are reproducible from code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub url: String,
    pub count: usize,
    pub client: ClientSettings,
}

impl BenchConfig {
    /// Validates parsed arguments into a runnable config.
    ///
    /// # Errors
    ///
    /// Returns `MissingUrl` when no target was given, an invalid-URL error
    /// when the target is not an absolute http(s) URL, or a count error past
    /// the request limit.
    pub fn from_args(args: &BenchArgs) -> AppResult<Self> {
        let url = args
            .url
            .as_deref()
            .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;
        validate_url(url)?;
        let count = check_request_count(args.count)?;

        Ok(Self {
            url: url.to_owned(),
            count,
            client: ClientSettings {
                timeout: args.timeout,
                connect_timeout: args.connect_timeout,
            },
        })
    }
}

fn validate_url(url: &str) -> AppResult<()> {
    let parsed = Url::parse(url).map_err(|err| {
        AppError::validation(ValidationError::InvalidUrl {
            url: url.to_owned(),
            source: err,
        })
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AppError::validation(ValidationError::UnsupportedScheme {
            scheme: scheme.to_owned(),
        })),
    }
}

/// Both summaries of one benchmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchReport {
    pub sequential: RunSummary,
    pub concurrent: RunSummary,
}

impl BenchReport {
    #[must_use]
    pub const fn failures(&self) -> u64 {
        self.sequential
            .failures
            .saturating_add(self.concurrent.failures)
    }
}

/// Starts the sequential and concurrent runners side by side and waits for both.
#[derive(Debug, Clone)]
pub struct Coordinator {
    config: BenchConfig,
}

impl Coordinator {
    #[must_use]
    pub const fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Runs both strategies over HTTP, each with its own client and connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error when an HTTP client cannot be built or a runner dies
    /// before signalling completion.
    pub async fn run(&self, reporter: Arc<dyn Reporter>) -> AppResult<BenchReport> {
        let sequential: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new(&self.config.client)?);
        let concurrent: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new(&self.config.client)?);
        self.run_with(sequential, concurrent, reporter).await
    }

    /// Runs both strategies with caller-supplied fetchers.
    ///
    /// # Errors
    ///
    /// Returns an error when either runner dies before signalling completion.
    pub async fn run_with(
        &self,
        sequential_fetcher: Arc<dyn Fetcher>,
        concurrent_fetcher: Arc<dyn Fetcher>,
        reporter: Arc<dyn Reporter>,
    ) -> AppResult<BenchReport> {
        let url: Arc<str> = Arc::from(self.config.url.as_str());
        let count = self.config.count;
        info!("Fetching {} {} time(s) per runner", url, count);

        let (sequential_tx, sequential_rx) = oneshot::channel();
        let (concurrent_tx, concurrent_rx) = oneshot::channel();

        let sequential_handle = tokio::spawn({
            let url = Arc::clone(&url);
            let reporter = Arc::clone(&reporter);
            async move {
                run_sequential(
                    sequential_fetcher.as_ref(),
                    &url,
                    count,
                    reporter.as_ref(),
                    sequential_tx,
                )
                .await;
            }
        });
        let concurrent_handle = tokio::spawn(async move {
            run_concurrent(
                &concurrent_fetcher,
                &url,
                count,
                reporter.as_ref(),
                concurrent_tx,
            )
            .await;
        });

        let sequential = await_summary(sequential_rx, SEQUENTIAL_LABEL).await;
        let concurrent = await_summary(concurrent_rx, CONCURRENT_LABEL).await;
        sequential_handle.await?;
        concurrent_handle.await?;

        Ok(BenchReport {
            sequential: sequential?,
            concurrent: concurrent?,
        })
    }
}

async fn await_summary(
    done: oneshot::Receiver<RunSummary>,
    label: &'static str,
) -> AppResult<RunSummary> {
    done.await.map_err(|err| {
        debug!("{} completion channel closed: {}", label, err);
        AppError::bench(BenchError::RunnerLost { label })
    })
}
