//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;

pub use cli::BenchArgs;
pub use defaults::{DEFAULT_CONFIG_FILES, DEFAULT_REQUEST_COUNT, MAX_REQUEST_COUNT};
pub use types::OutputFormat;
