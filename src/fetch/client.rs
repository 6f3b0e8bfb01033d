use std::time::Duration;

use reqwest::Client;

use crate::error::AppResult;

/// Transport knobs for one benchmark client. `None` keeps reqwest's default (no deadline).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientSettings {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

/// Builds a fresh HTTP client with its own connection pool.
///
/// No default headers are installed; requests go out exactly as reqwest sends a bare GET.
///
/// # Errors
///
/// Returns an error when the TLS backend or resolver cannot be initialised.
pub fn build_client(settings: &ClientSettings) -> AppResult<Client> {
    let mut builder = Client::builder();

    if let Some(timeout) = settings.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(connect_timeout) = settings.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    Ok(builder.build()?)
}
