//! Submission state shared by every flow page.
//!
//! A page is `Idle` (optionally showing the last error or confirmation),
//! `Submitting` while its one network call is in flight, or `Redirecting` once a
//! navigation target has been chosen. [`FlowState::begin`] is the only way into
//! `Submitting` and refuses while a submission is outstanding, so a page never
//! has two requests in flight.

use crate::{
    app_lib::AppError, features::auth::password::PasswordPolicyError,
    features::auth::query::AuthorizeContext,
};
use std::fmt;

/// A failure shown inline on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowError {
    /// Rejected locally; no request was sent.
    Validation(String),
    /// The backend or the network failed.
    Transport(String),
}

impl FlowError {
    pub fn validation(message: impl Into<String>) -> Self {
        FlowError::Validation(message.into())
    }

    /// Uses the backend's message when it sent one, else `fallback`.
    pub fn transport(err: &AppError, fallback: &str) -> Self {
        FlowError::Transport(err.user_message(fallback))
    }

    pub fn message(&self) -> &str {
        match self {
            FlowError::Validation(message) | FlowError::Transport(message) => message,
        }
    }
}

impl fmt::Display for FlowError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl std::error::Error for FlowError {}

impl From<PasswordPolicyError> for FlowError {
    fn from(err: PasswordPolicyError) -> Self {
        FlowError::Validation(err.to_string())
    }
}

/// Result of one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Redirect { target: String },
    Confirmed { message: String },
    Failure(FlowError),
}

impl SubmissionOutcome {
    /// Redirect to the backend's `authorize_url`, or to the context's
    /// `return_to` fallback when there is none.
    pub fn redirect(authorize_url: Option<String>, ctx: &AuthorizeContext) -> Self {
        let target = authorize_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| ctx.return_target().to_string());
        SubmissionOutcome::Redirect { target }
    }

    /// Variant name, for logs. Redirect targets may carry an authorization
    /// code and are never logged.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionOutcome::Redirect { .. } => "redirect",
            SubmissionOutcome::Confirmed { .. } => "confirmed",
            SubmissionOutcome::Failure(_) => "failure",
        }
    }

    /// Inline confirmation with the backend's message or `fallback`.
    pub fn confirmed(message: Option<String>, fallback: &str) -> Self {
        SubmissionOutcome::Confirmed {
            message: message.unwrap_or_else(|| fallback.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowState {
    Idle {
        last_error: Option<FlowError>,
        last_success: Option<String>,
    },
    Submitting,
    Redirecting {
        target: String,
    },
}

impl Default for FlowState {
    fn default() -> Self {
        FlowState::Idle {
            last_error: None,
            last_success: None,
        }
    }
}

impl FlowState {
    /// Enters `Submitting` from `Idle`. Returns `false` and changes nothing
    /// otherwise.
    pub fn begin(&mut self) -> bool {
        match self {
            FlowState::Idle { .. } => {
                *self = FlowState::Submitting;
                true
            }
            FlowState::Submitting | FlowState::Redirecting { .. } => false,
        }
    }

    /// Applies the outcome of the current submission and returns the
    /// navigation target, if any. Ignored unless `Submitting`.
    pub fn settle(&mut self, outcome: SubmissionOutcome) -> Option<String> {
        if !matches!(self, FlowState::Submitting) {
            return None;
        }

        match outcome {
            SubmissionOutcome::Redirect { target } => {
                *self = FlowState::Redirecting {
                    target: target.clone(),
                };
                Some(target)
            }
            SubmissionOutcome::Confirmed { message } => {
                *self = FlowState::Idle {
                    last_error: None,
                    last_success: Some(message),
                };
                None
            }
            SubmissionOutcome::Failure(err) => {
                *self = FlowState::Idle {
                    last_error: Some(err),
                    last_success: None,
                };
                None
            }
        }
    }

    /// True while the submit control must stay disabled.
    pub fn is_busy(&self) -> bool {
        !matches!(self, FlowState::Idle { .. })
    }

    pub fn last_error(&self) -> Option<&FlowError> {
        match self {
            FlowState::Idle { last_error, .. } => last_error.as_ref(),
            _ => None,
        }
    }

    pub fn last_success(&self) -> Option<&str> {
        match self {
            FlowState::Idle { last_success, .. } => last_success.as_deref(),
            _ => None,
        }
    }
}
