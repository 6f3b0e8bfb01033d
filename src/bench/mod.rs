//! Sequential vs. concurrent fetch runs and the coordinator that races them.
mod concurrent;
mod coordinator;
mod report;
mod sequential;
mod summary;

#[cfg(test)]
mod test_support;

pub use concurrent::run_concurrent;
pub use coordinator::{BenchConfig, BenchReport, Coordinator};
pub use report::{Reporter, StdoutReporter, render_summary};
pub use sequential::run_sequential;
pub use summary::{CONCURRENT_LABEL, RunSummary, SEQUENTIAL_LABEL};
