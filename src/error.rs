//! Error taxonomy for panel operations.
//!
//! DESIGN
//! ======
//! Four variants cover every failure a component can surface: a
//! synchronous validation rejection, a transport failure, a completed
//! request with a bad status or body, and a catch-all. Errors are values
//! carried inside [`crate::RequestState`], never exceptions crossing a
//! component boundary; `Display` is the inline message the UI shows.

/// Errors surfaced into component state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    /// Client-side input failed a synchronous check; no request was issued.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The request could not be completed (connect failure, timeout, offline).
    #[error("network failure: {0}")]
    Network(String),

    /// The server answered, but with a non-success status or an unexpected body.
    #[error("unexpected response (status {status}): {detail}")]
    Response { status: u16, detail: String },

    /// Any failure not classified above.
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl PanelError {
    /// Whether retrying the same operation has a reasonable chance of succeeding.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Response { status: 429 | 500..=599, .. }
        )
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
