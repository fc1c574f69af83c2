//! The four-state request lifecycle union.
//!
//! Exactly one variant holds at a time; transitions are driven solely by
//! the outcome of the single in-flight request that owns the state.

use crate::error::PanelError;

/// Lifecycle of one asynchronous resource request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState<T> {
    /// No request has been issued yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The request settled with a parsed payload.
    Success(T),
    /// The request settled with a failure.
    Error(PanelError),
}

impl<T> RequestState<T> {
    /// True while a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True once the request has reached Success or Error.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Error(_))
    }

    /// The payload, if the request succeeded.
    #[must_use]
    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Success(payload) => Some(payload),
            _ => None,
        }
    }

    /// The failure, if the request errored.
    #[must_use]
    pub fn error(&self) -> Option<&PanelError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
