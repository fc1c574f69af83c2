//! Endpoint descriptors and JSON fetch execution.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is classified into the [`PanelError`] taxonomy before it
//! leaves this module: transport problems (connect, timeout) become
//! `Network`, completed-but-bad responses (non-2xx status, body that does
//! not match the expected shape) become `Response`, and client
//! construction problems fall through to `Unknown`. Nothing panics.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::FetchConfig;
use crate::error::PanelError;

// =============================================================================
// ENDPOINT DESCRIPTOR
// =============================================================================

/// HTTP method for an [`Endpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Describes one resource request: URL, method, optional JSON body, and an
/// optional per-endpoint timeout overriding [`FetchConfig::request_timeout`].
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub url: String,
    pub method: Method,
    pub body: Option<serde_json::Value>,
    pub timeout: Option<Duration>,
}

impl Endpoint {
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self { url: url.into(), method: Method::Get, body: None, timeout: None }
    }

    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self { url: url.into(), method: Method::Post, body: None, timeout: None }
    }

    #[must_use]
    pub fn put(url: impl Into<String>) -> Self {
        Self { url: url.into(), method: Method::Put, body: None, timeout: None }
    }

    #[must_use]
    pub fn delete(url: impl Into<String>) -> Self {
        Self { url: url.into(), method: Method::Delete, body: None, timeout: None }
    }

    /// Attach a JSON request body.
    #[must_use]
    pub fn json_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Override the configured request timeout for this endpoint only.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

// =============================================================================
// FETCHER
// =============================================================================

/// Reqwest wrapper executing [`Endpoint`]s into typed JSON payloads.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct Fetcher {
    http: reqwest::Client,
    max_body_bytes: usize,
}

impl Fetcher {
    /// Build a fetcher with the configured request and connect timeouts.
    ///
    /// # Errors
    ///
    /// `Unknown` when the underlying HTTP client cannot be constructed.
    pub fn new(config: FetchConfig) -> Result<Self, PanelError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| PanelError::Unknown(format!("http client build failed: {e}")))?;
        Ok(Self { http, max_body_bytes: config.max_body_bytes })
    }

    /// Execute the endpoint and parse the response body as `T`.
    ///
    /// # Errors
    ///
    /// `Network` when the request could not complete, `Response` when the
    /// server answered with a non-2xx status or a body that does not
    /// deserialize into `T`.
    pub async fn fetch_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, PanelError> {
        let mut request = match endpoint.method {
            Method::Get => self.http.get(&endpoint.url),
            Method::Post => self.http.post(&endpoint.url),
            Method::Put => self.http.put(&endpoint.url),
            Method::Delete => self.http.delete(&endpoint.url),
        };
        if let Some(body) = &endpoint.body {
            request = request.json(body);
        }
        if let Some(timeout) = endpoint.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(classify_transport)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(classify_transport)?;

        if !(200..300).contains(&status) {
            return Err(PanelError::Response {
                status,
                detail: truncate(&text, self.max_body_bytes),
            });
        }

        serde_json::from_str(&text).map_err(|e| PanelError::Response {
            status,
            detail: format!("body did not match expected shape: {e}"),
        })
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn classify_transport(err: reqwest::Error) -> PanelError {
    if err.is_timeout() {
        PanelError::Network(format!("request timed out: {err}"))
    } else if err.is_connect() {
        PanelError::Network(format!("connection failed: {err}"))
    } else if err.is_builder() {
        PanelError::Unknown(format!("request build failed: {err}"))
    } else {
        PanelError::Network(err.to_string())
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}

#[cfg(test)]
#[path = "fetch_test.rs"]
mod tests;
