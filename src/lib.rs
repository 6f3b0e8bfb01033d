//! Core library for the `fetchbench` CLI.
//!
//! Fetches one URL a fixed number of times twice over, once strictly one
//! request after another and once with every request in flight at the same
//! time, then reports the byte totals and wall-clock time of each run. The
//! binary is a thin wrapper around [`bench::Coordinator`]; tests and other
//! callers can drive the same runners with their own [`fetch::Fetcher`].
pub mod args;
pub mod bench;
pub mod config;
pub mod error;
pub mod fetch;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
