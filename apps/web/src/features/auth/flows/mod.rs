//! One protocol module per page. Each exposes a form type, a synchronous
//! `prepare` that performs every local check and builds the request, and an
//! async `submit` that makes the page's single backend call and maps the reply
//! to a [`SubmissionOutcome`](crate::features::auth::machine::SubmissionOutcome).

pub mod error_page;
pub mod forgot_password;
pub mod login;
pub mod otp_request;
pub mod otp_verify;
pub mod register;

/// Trimmed `value`, or `None` when blank.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
