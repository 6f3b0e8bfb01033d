use clap::Parser;
use clap::builder::FalseyValueParser;
use std::time::Duration;

use super::defaults::DEFAULT_REQUEST_COUNT;
use super::parsers::{parse_duration_arg, parse_request_count};
use super::types::OutputFormat;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Fetch one URL N times sequentially and N times concurrently, then compare total bytes and wall-clock time."
)]
pub struct BenchArgs {
    /// Target URL to fetch
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Requests issued by each runner (at most 1000000)
    #[arg(
        long = "count",
        short = 'n',
        default_value_t = DEFAULT_REQUEST_COUNT,
        value_parser = parse_request_count
    )]
    pub count: usize,

    /// Per-request timeout (supports ms/s/m/h); unset waits as long as the transport does
    #[arg(long = "timeout", value_parser = parse_duration_arg)]
    pub timeout: Option<Duration>,

    /// Timeout for establishing a new connection (supports ms/s/m/h)
    #[arg(long = "connect-timeout", value_parser = parse_duration_arg)]
    pub connect_timeout: Option<Duration>,

    /// Output format for run summaries
    #[arg(long = "format", default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Exit with an error if any fetch failed
    #[arg(long = "strict")]
    pub strict: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by FETCHBENCH_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output (NO_COLOR set to anything but a false-like value also disables it)
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Path to config file (TOML/JSON). Defaults to ./fetchbench.toml or ./fetchbench.json if present.
    #[arg(long)]
    pub config: Option<String>,
}
