use thiserror::Error;

/// Why a single fetch produced no bytes.
///
/// Carried inside a `FetchResult`; runners count these but never abort on them.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    #[error("reading response body failed: {source}")]
    Body {
        #[source]
        source: reqwest::Error,
    },
    #[error("fetch task ended without delivering a result")]
    TaskLost,
}
