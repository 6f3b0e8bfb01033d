use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing URL (pass it as the first argument or set `url` in config).")]
    MissingUrl,
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported URL scheme '{scheme}'. Use http or https.")]
    UnsupportedScheme { scheme: String },
    #[error("Invalid request count '{value}': {source}")]
    InvalidRequestCount {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Request count {count} exceeds the maximum of {max}.")]
    RequestCountTooLarge { count: usize, max: usize },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("{failures} fetch(es) failed (strict mode).")]
    FetchFailures { failures: u64 },
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
