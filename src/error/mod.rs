mod app;
mod bench;
mod config;
mod fetch;
mod validation;


pub use app::{AppError, AppResult};
pub use bench::BenchError;
pub use config::ConfigError;
pub use fetch::FetchError;
pub use validation::ValidationError;
