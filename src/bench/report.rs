use std::io::Write;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::args::OutputFormat;
use crate::error::AppResult;

use super::summary::RunSummary;

/// Where runners announce themselves and surface their summaries.
pub trait Reporter: Send + Sync {
    fn starting(&self, label: &'static str);
    fn finished(&self, summary: &RunSummary);
}

/// Prints to standard output in the selected [`OutputFormat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutReporter {
    format: OutputFormat,
}

impl StdoutReporter {
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Reporter for StdoutReporter {
    fn starting(&self, label: &'static str) {
        match self.format {
            OutputFormat::Text => emit(&format!("{} starting...", label)),
            OutputFormat::Json => info!("{} starting...", label),
        }
    }

    fn finished(&self, summary: &RunSummary) {
        debug!(
            "{}: {} request(s), {} failure(s), mean latency {:?}",
            summary.label, summary.requests, summary.failures, summary.mean_latency
        );
        match render_summary(summary, self.format) {
            Ok(line) => emit(&line),
            Err(err) => error!("Failed to render {} summary: {}", summary.label, err),
        }
    }
}

// A closed stdout (e.g. piped into `head`) must not take the runner down.
fn emit(line: &str) {
    if let Err(err) = write_line(&mut std::io::stdout().lock(), line) {
        warn!("Failed to write to stdout: {}", err);
    }
}

fn write_line<W: Write>(out: &mut W, line: &str) -> std::io::Result<()> {
    writeln!(out, "{}", line)?;
    out.flush()
}

#[derive(Debug, Serialize)]
struct SummaryRecord<'summary> {
    label: &'summary str,
    requests: u64,
    total_bytes: u64,
    failures: u64,
    elapsed_us: u64,
    mean_latency_us: Option<u64>,
}

/// Renders the single output line for a finished run.
///
/// # Errors
///
/// Returns an error when JSON serialization fails.
pub fn render_summary(summary: &RunSummary, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(summary.to_string()),
        OutputFormat::Json => {
            let record = SummaryRecord {
                label: summary.label,
                requests: summary.requests,
                total_bytes: summary.total_bytes,
                failures: summary.failures,
                elapsed_us: micros(summary.elapsed),
                mean_latency_us: summary.mean_latency.map(micros),
            };
            Ok(serde_json::to_string(&record)?)
        }
    }
}

fn micros(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}
