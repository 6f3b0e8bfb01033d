use std::sync::Arc;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use fetchbench::args::BenchArgs;
use fetchbench::bench::{BenchConfig, Coordinator, Reporter, StdoutReporter};
use fetchbench::config::{apply_config, load_config};
use fetchbench::error::{AppError, AppResult, ValidationError};

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;
    apply_file_config(&mut args, &matches)?;

    crate::logger::init_logging(args.verbose, args.no_color);

    if args.url.is_none() {
        print_usage();
        tracing::error!("Missing URL (pass it as the first argument or set `url` in config).");
        return Err(AppError::validation(ValidationError::MissingUrl));
    }
    let config = BenchConfig::from_args(&args)?;
    let reporter: Arc<dyn Reporter> = Arc::new(StdoutReporter::new(args.format));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let report = runtime.block_on(Coordinator::new(config).run(reporter))?;

    let failures = report.failures();
    if args.strict && failures > 0 {
        tracing::error!("{} fetch(es) failed.", failures);
        return Err(AppError::validation(ValidationError::FetchFailures {
            failures,
        }));
    }
    Ok(())
}

fn parse_args() -> AppResult<(BenchArgs, ArgMatches)> {
    let matches = BenchArgs::command().get_matches();
    let args = BenchArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn apply_file_config(args: &mut BenchArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(args, matches, &config)?;
    }
    Ok(())
}

fn print_usage() {
    let mut cmd = BenchArgs::command();
    eprintln!("{}", cmd.render_usage());
}
