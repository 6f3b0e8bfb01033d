use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::time::Instant;
use tracing::debug;

use crate::error::{AppResult, FetchError};

use super::client::{ClientSettings, build_client};

/// Outcome of one GET: the body length, how long it took, and why it failed (if it did).
///
/// A failed fetch always reports zero bytes, so it can be summed like any other result.
#[derive(Debug)]
pub struct FetchResult {
    pub bytes: u64,
    pub latency: Duration,
    pub failure: Option<FetchError>,
}

impl FetchResult {
    #[must_use]
    pub const fn succeeded(bytes: u64, latency: Duration) -> Self {
        Self {
            bytes,
            latency,
            failure: None,
        }
    }

    #[must_use]
    pub fn failed(failure: FetchError, latency: Duration) -> Self {
        Self {
            bytes: 0,
            latency,
            failure: Some(failure),
        }
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}

/// Issues one retrieval of `url` and reports its size.
///
/// Implementations never return an error: transport problems are folded into
/// a zero-byte [`FetchResult`] carrying the failure.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchResult;
}

/// [`Fetcher`] backed by its own `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher with a dedicated connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(settings: &ClientSettings) -> AppResult<Self> {
        Ok(Self {
            client: build_client(settings)?,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        let started = Instant::now();

        // Status codes are not checked; an error page still counts its body.
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                debug!("GET {} failed: {}", url, err);
                return FetchResult::failed(
                    FetchError::Transport { source: err },
                    started.elapsed(),
                );
            }
        };

        // `bytes()` consumes the response, releasing the connection on both arms.
        match response.bytes().await {
            Ok(body) => {
                let bytes = u64::try_from(body.len()).unwrap_or(u64::MAX);
                FetchResult::succeeded(bytes, started.elapsed())
            }
            Err(err) => {
                debug!("Reading body from {} failed: {}", url, err);
                FetchResult::failed(FetchError::Body { source: err }, started.elapsed())
            }
        }
    }
}
