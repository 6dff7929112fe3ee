//! Account registration.

use super::non_empty;
use crate::{
    app_lib::AuthApi,
    features::auth::{
        client,
        machine::{FlowError, SubmissionOutcome},
        password::validate_password,
        query::AuthorizeContext,
        types::PasswordRegisterRequest,
    },
};
use tracing::debug;

pub const MISSING_CONTEXT: &str = "Missing state or client ID. Please start from the OAuth flow.";
pub const REGISTRATION_FAILED: &str = "Registration failed.";

#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub name: String,
    /// Only read when the context carries neither `state` nor `client_id`.
    pub client_id: String,
}

/// The page asks for a client ID when there is nothing else to bind the
/// registration to.
pub fn shows_client_id_input(ctx: &AuthorizeContext) -> bool {
    ctx.state.is_none() && ctx.client_id.is_none()
}

/// Requires `state` or a client ID, then checks the password policy.
///
/// # Errors
/// Returns a validation error naming the first failed check.
pub fn prepare(
    ctx: &AuthorizeContext,
    form: &RegisterForm,
) -> Result<PasswordRegisterRequest, FlowError> {
    let client_id = ctx.client_id.clone().or_else(|| {
        if shows_client_id_input(ctx) {
            non_empty(&form.client_id)
        } else {
            None
        }
    });
    if ctx.state.is_none() && client_id.is_none() {
        return Err(FlowError::validation(MISSING_CONTEXT));
    }
    validate_password(&form.password)?;

    Ok(PasswordRegisterRequest {
        email: form.email.trim().to_string(),
        password: form.password.clone(),
        name: non_empty(&form.name),
        client_id,
        state: ctx.state.clone(),
    })
}

pub async fn submit<A: AuthApi>(
    api: &A,
    ctx: &AuthorizeContext,
    request: &PasswordRegisterRequest,
) -> SubmissionOutcome {
    match client::password_register(api, request).await {
        Ok(response) => SubmissionOutcome::redirect(response.authorize_url, ctx),
        Err(err) => {
            debug!("registration failed: {err}");
            SubmissionOutcome::Failure(FlowError::transport(&err, REGISTRATION_FAILED))
        }
    }
}
