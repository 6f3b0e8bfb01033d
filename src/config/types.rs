use std::time::Duration;

use serde::Deserialize;

use crate::args::OutputFormat;
use crate::args::parsers::parse_duration;
use crate::error::{AppError, AppResult, ConfigError};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub count: Option<usize>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub format: Option<OutputFormat>,
    pub strict: Option<bool>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}

/// A duration written either as bare seconds (`timeout = 5`) or with a unit (`timeout = "250ms"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self, field: &'static str) -> AppResult<Duration> {
        match self {
            DurationValue::Seconds(0) => Err(AppError::config(ConfigError::DurationZero { field })),
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration(text)
                .map_err(|source| AppError::config(ConfigError::InvalidDuration { field, source })),
        }
    }
}
