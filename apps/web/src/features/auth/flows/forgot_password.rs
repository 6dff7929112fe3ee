//! Password reset request.

use crate::{
    app_lib::AuthApi,
    features::auth::{
        client,
        machine::{FlowError, SubmissionOutcome},
        query::QueryParams,
        types::ForgotPasswordRequest,
    },
};
use tracing::debug;

pub const RESET_SENT: &str =
    "If the account exists, password reset instructions have been sent.";
pub const REQUEST_FAILED: &str = "Request failed.";
pub const MISSING_EMAIL: &str = "Enter your email address.";

#[derive(Clone, Debug, Default)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    /// Pre-fills the email from the `email` parameter.
    pub fn from_query(query: &QueryParams) -> Self {
        Self {
            email: query.get("email").to_string(),
        }
    }
}

/// # Errors
/// Returns a validation error when the email is blank.
pub fn prepare(form: &ForgotPasswordForm) -> Result<ForgotPasswordRequest, FlowError> {
    let email = form.email.trim();
    if email.is_empty() {
        return Err(FlowError::validation(MISSING_EMAIL));
    }
    Ok(ForgotPasswordRequest {
        email: email.to_string(),
    })
}

pub async fn submit<A: AuthApi>(api: &A, request: &ForgotPasswordRequest) -> SubmissionOutcome {
    match client::forgot_password(api, request).await {
        Ok(response) => SubmissionOutcome::confirmed(response.message, RESET_SENT),
        Err(err) => {
            debug!("password reset request failed: {err}");
            SubmissionOutcome::Failure(FlowError::transport(&err, REQUEST_FAILED))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app_lib::AppError, features::auth::flows::fake::FakeApi};
    use serde_json::json;

    #[test]
    fn form_prefills_email() {
        let form = ForgotPasswordForm::from_query(&QueryParams::parse("?email=ada%40example.com"));
        assert_eq!(form.email, "ada@example.com");
    }

    #[test]
    fn prepare_rejects_blank_email() {
        assert_eq!(
            prepare(&ForgotPasswordForm::default()).err(),
            Some(FlowError::validation(MISSING_EMAIL))
        );
    }

    #[tokio::test]
    async fn submit_confirms_regardless_of_account() {
        let api = FakeApi::new().respond(client::PASSWORD_FORGOT_PATH, json!({"message": ""}));
        let request = prepare(&ForgotPasswordForm {
            email: " ada@example.com ".to_string(),
        })
        .expect("valid");

        assert_eq!(
            submit(&api, &request).await,
            SubmissionOutcome::Confirmed {
                message: RESET_SENT.to_string()
            }
        );
        assert_eq!(api.calls()[0].body, Some(json!({"email": "ada@example.com"})));
    }

    #[tokio::test]
    async fn submit_uses_generic_failure() {
        let api = FakeApi::new().fail(
            client::PASSWORD_FORGOT_PATH,
            AppError::Network("offline".to_string()),
        );
        let request = ForgotPasswordRequest {
            email: "ada@example.com".to_string(),
        };

        assert_eq!(
            submit(&api, &request).await,
            SubmissionOutcome::Failure(FlowError::Transport(REQUEST_FAILED.to_string()))
        );
    }
}
