//! Single-request HTTP fetching.
mod client;
mod fetcher;


pub use client::{ClientSettings, build_client};
pub use fetcher::{FetchResult, Fetcher, HttpFetcher};
