//! One-time code verification.

use super::non_empty;
use crate::{
    app_lib::AuthApi,
    features::auth::{
        client,
        machine::{FlowError, SubmissionOutcome},
        query::{AuthorizeContext, QueryParams},
        types::OtpVerifyRequest,
    },
    routes::paths,
};
use tracing::debug;

pub const MISSING_CLIENT_ID: &str = "Client ID is required to verify the OTP.";
pub const OTP_VERIFY_FAILED: &str = "OTP verification failed.";
pub const MISSING_CODE: &str = "Enter the code you received.";

#[derive(Clone, Debug, Default)]
pub struct OtpVerifyForm {
    pub identifier: String,
    pub code: String,
    /// Only read when the context has no `client_id`.
    pub client_id: String,
}

impl OtpVerifyForm {
    /// Pre-fills the identifier from the `phone` parameter.
    pub fn from_query(query: &QueryParams) -> Self {
        Self {
            identifier: query.get("phone").to_string(),
            ..Self::default()
        }
    }
}

pub fn shows_client_id_input(ctx: &AuthorizeContext) -> bool {
    ctx.client_id.is_none()
}

/// Requires a client ID, then a code. `scope` and `state` are forwarded only
/// when the context carries them.
///
/// # Errors
/// Returns a validation error naming the first failed check.
pub fn prepare(ctx: &AuthorizeContext, form: &OtpVerifyForm) -> Result<OtpVerifyRequest, FlowError> {
    let client_id = ctx
        .client_id
        .clone()
        .or_else(|| non_empty(&form.client_id))
        .ok_or_else(|| FlowError::validation(MISSING_CLIENT_ID))?;
    let code = form.code.trim();
    if code.is_empty() {
        return Err(FlowError::validation(MISSING_CODE));
    }

    Ok(OtpVerifyRequest {
        phone: form.identifier.trim().to_string(),
        code: code.to_string(),
        client_id,
        scope: ctx.scope.clone(),
        state: ctx.state.clone(),
    })
}

pub async fn submit<A: AuthApi>(
    api: &A,
    ctx: &AuthorizeContext,
    request: &OtpVerifyRequest,
) -> SubmissionOutcome {
    match client::verify_otp(api, request).await {
        Ok(response) => SubmissionOutcome::redirect(response.authorize_url, ctx),
        Err(err) => {
            debug!("otp verification failed: {err}");
            SubmissionOutcome::Failure(FlowError::transport(&err, OTP_VERIFY_FAILED))
        }
    }
}

/// Link back to the request page carrying the identifier typed so far.
pub fn request_link(ctx: &AuthorizeContext, identifier: &str) -> String {
    ctx.link(paths::OTP_REQUEST, &[("phone", identifier.trim())])
}
