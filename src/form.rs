//! Single-input form field with validation and async submission.
//!
//! DESIGN
//! ======
//! Validation runs on every change and again on submit; invalid input
//! blocks submission before the async action is ever invoked. The
//! submission lifecycle reuses [`RequestState`] with a `String` success
//! message, so the control is disabled exactly while a submit is in
//! flight — exclusive `&mut self` access plus the Loading guard prevent
//! duplicate sends.

use std::future::Future;
use std::sync::Arc;

use crate::error::PanelError;
use crate::state::RequestState;

/// One mutable string bound to one input control.
pub struct FormField {
    value: String,
    validator: Arc<dyn Fn(&str) -> Result<(), String> + Send + Sync>,
    error: Option<String>,
    submit_state: RequestState<String>,
}

impl FormField {
    /// Create an empty field with the given synchronous validator.
    pub fn new(validator: impl Fn(&str) -> Result<(), String> + Send + Sync + 'static) -> Self {
        Self {
            value: String::new(),
            validator: Arc::new(validator),
            error: None,
            submit_state: RequestState::Idle,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Update the bound value; the validator runs immediately.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.error = (self.validator)(&self.value).err();
    }

    /// The current field-level validation error, if any.
    #[must_use]
    pub fn field_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        (self.validator)(&self.value).is_ok()
    }

    /// True while a submission is in flight; the control should be
    /// disabled for the duration.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.submit_state.is_loading()
    }

    /// Lifecycle of the most recent submission attempt.
    #[must_use]
    pub fn submit_state(&self) -> &RequestState<String> {
        &self.submit_state
    }

    /// The success message from the last completed submission, if any.
    #[must_use]
    pub fn success_message(&self) -> Option<&str> {
        self.submit_state.payload().map(String::as_str)
    }

    /// Validate, then run the caller-supplied async action with the
    /// current value. Invalid input blocks the action entirely; the
    /// field error and a `Validation` submit state are surfaced instead.
    /// On completion the action's success message or error is recorded
    /// verbatim.
    pub async fn submit<F, Fut>(&mut self, action: F)
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<String, PanelError>>,
    {
        if self.submit_state.is_loading() {
            tracing::debug!("submit ignored: already in flight");
            return;
        }
        if let Err(reason) = (self.validator)(&self.value) {
            self.error = Some(reason.clone());
            self.submit_state = RequestState::Error(PanelError::Validation(reason));
            return;
        }
        self.error = None;

        self.submit_state = RequestState::Loading;
        match action(self.value.clone()).await {
            Ok(message) => {
                self.submit_state = RequestState::Success(message);
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission failed");
                self.submit_state = RequestState::Error(err);
            }
        }
    }

    /// Clear the submission lifecycle back to Idle (the value and its
    /// validation state are kept).
    pub fn reset_submission(&mut self) {
        self.submit_state = RequestState::Idle;
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
