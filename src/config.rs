use std::time::Duration;

use reqwest::Url;

use crate::error::{Result, ScheduleError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const BASE_URL_ENV: &str = "OLYMPIC_API_URL";
const TIMEOUT_ENV: &str = "OLYMPIC_API_TIMEOUT_SECS";

/// Settings for [`ScheduleClient`](crate::ScheduleClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with `OLYMPIC_API_URL` and `OLYMPIC_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(url) = lookup(BASE_URL_ENV) {
            config = config.with_base_url(url);
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ScheduleError::InvalidConfig {
                    key: TIMEOUT_ENV,
                    reason: e.to_string(),
                }
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        config.validated_base_url()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The base URL, checked for an http(s) scheme and stripped of trailing `/`.
    pub fn validated_base_url(&self) -> Result<String> {
        normalize_base_url(&self.base_url)
    }
}

pub(crate) fn normalize_base_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw.trim()).map_err(|e| ScheduleError::InvalidConfig {
        key: BASE_URL_ENV,
        reason: format!("{raw}: {e}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ScheduleError::InvalidConfig {
            key: BASE_URL_ENV,
            reason: format!("unsupported scheme {}", url.scheme()),
        });
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}
