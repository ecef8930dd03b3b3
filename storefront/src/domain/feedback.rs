//! Transport-agnostic feedback payload for the presentation layer.
//!
//! Inbound adapters render a [`Feedback`] wherever a screen would show a
//! toast. Codes are stable and serialise as snake_case.

use serde::Serialize;
use serde_json::{Value, json};

use super::profile::{REGISTRATION_FAILURE_MESSAGE, REGISTRATION_SUCCESS_MESSAGE};
use super::session_gate::SessionError;

/// Stable machine-readable outcome category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCode {
    /// The operation completed.
    Success,
    /// Submitted data failed validation.
    ValidationFailed,
    /// The requested screen change is not allowed from the current screen.
    InvalidTransition,
    /// The profile store could not complete the request.
    StoreUnavailable,
}

/// Message shown to the user after an operation.
///
/// Serialises as `{"code": ..., "message": ..., "details": ...}` with
/// `details` omitted when absent.
///
/// # Examples
/// ```
/// use storefront::domain::{Feedback, FeedbackCode};
///
/// let feedback = Feedback::registration_succeeded();
/// assert_eq!(feedback.code(), FeedbackCode::Success);
/// assert_eq!(feedback.message(), "Registration successful!");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    code: FeedbackCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Feedback {
    fn new(code: FeedbackCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Feedback for a completed registration.
    pub fn registration_succeeded() -> Self {
        Self::new(FeedbackCode::Success, REGISTRATION_SUCCESS_MESSAGE)
    }

    pub fn code(&self) -> FeedbackCode {
        self.code
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary structured details, such as the blank field names.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&SessionError> for Feedback {
    fn from(error: &SessionError) -> Self {
        match error {
            SessionError::Validation(validation) => {
                let blank: Vec<&str> = validation
                    .blank_fields()
                    .iter()
                    .map(|field| field.label())
                    .collect();
                Self::new(FeedbackCode::ValidationFailed, REGISTRATION_FAILURE_MESSAGE)
                    .with_details(json!({ "blankFields": blank }))
            }
            SessionError::InvalidTransition { from, to } => {
                Self::new(FeedbackCode::InvalidTransition, error.to_string())
                    .with_details(json!({ "from": from.route(), "to": to.route() }))
            }
            SessionError::Store(_) => Self::new(FeedbackCode::StoreUnavailable, error.to_string()),
        }
    }
}

impl From<SessionError> for Feedback {
    fn from(error: SessionError) -> Self {
        Self::from(&error)
    }
}
