use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::BenchArgs;
use crate::args::parsers::check_request_count;
use crate::error::AppResult;

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments.
///
/// Values given explicitly on the command line (or through their env var)
/// win; the config file only fills what was left at its default.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn apply_config(
    args: &mut BenchArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_explicit(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_explicit(matches, "count")
        && let Some(count) = config.count
    {
        args.count = check_request_count(count)?;
    }

    if !is_explicit(matches, "timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.timeout = Some(timeout.to_duration("timeout")?);
    }

    if !is_explicit(matches, "connect_timeout")
        && let Some(timeout) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = Some(timeout.to_duration("connect_timeout")?);
    }

    if !is_explicit(matches, "format")
        && let Some(format) = config.format
    {
        args.format = format;
    }

    if !is_explicit(matches, "strict")
        && let Some(strict) = config.strict
    {
        args.strict = strict;
    }

    if !is_explicit(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_explicit(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}
