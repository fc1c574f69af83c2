//! Fetch configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1_048_576;

/// Tuning knobs for HTTP fetches issued by panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchConfig {
    /// Total time allowed for one request, including the response body.
    pub request_timeout: Duration,
    /// Time allowed for connection establishment.
    pub connect_timeout: Duration,
    /// Cap on response bytes echoed into error details.
    pub max_body_bytes: usize,
}

impl FetchConfig {
    /// Build typed fetch config from environment variables.
    ///
    /// Optional:
    /// - `PANEL_REQUEST_TIMEOUT_SECS`: default 30
    /// - `PANEL_CONNECT_TIMEOUT_SECS`: default 10
    /// - `PANEL_MAX_BODY_BYTES`: default 1 MiB
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            request_timeout: Duration::from_secs(env_parse(
                "PANEL_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )),
            connect_timeout: Duration::from_secs(env_parse(
                "PANEL_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )),
            max_body_bytes: env_parse("PANEL_MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
