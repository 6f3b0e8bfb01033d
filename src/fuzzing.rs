use std::time::Duration;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::BenchArgs;
use crate::args::parsers::parse_duration_arg;
use crate::bench::BenchConfig;
use crate::config::apply_config;
use crate::config::types::ConfigFile;
use crate::error::AppResult;

thread_local! {
    static BASE_MATCHES: ArgMatches = BenchArgs::command().get_matches_from(["fetchbench"]);
}

/// Parses a duration argument (e.g. `10s`, `500ms`).
///
/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_duration_arg_input(input: &str) -> AppResult<Duration> {
    parse_duration_arg(input)
}

/// Parses TOML config, applies it to default arguments and validates the result.
///
/// # Errors
///
/// Returns an error when parsing, application, or URL validation fails.
pub fn apply_config_from_toml(input: &str) -> AppResult<BenchConfig> {
    let config: ConfigFile = toml::from_str(input)?;
    BASE_MATCHES.with(|matches| {
        let mut args = BenchArgs::from_arg_matches(matches)?;
        apply_config(&mut args, matches, &config)?;
        BenchConfig::from_args(&args)
    })
}
