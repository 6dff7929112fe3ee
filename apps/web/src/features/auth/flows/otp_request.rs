//! One-time code request.

use crate::{
    app_lib::AuthApi,
    features::auth::{
        client,
        machine::{FlowError, SubmissionOutcome},
        query::{AuthorizeContext, QueryParams},
        types::{OtpChannel, OtpCodeRequest},
    },
    routes::paths,
};
use tracing::debug;

pub const OTP_ACCEPTED: &str = "OTP request accepted.";
pub const OTP_REQUEST_FAILED: &str = "OTP request failed.";
pub const MISSING_IDENTIFIER: &str = "Enter a phone number or email.";

#[derive(Clone, Debug, Default)]
pub struct OtpRequestForm {
    pub identifier: String,
    pub channel: OtpChannel,
}

impl OtpRequestForm {
    /// Pre-fills the identifier from the `phone` parameter.
    pub fn from_query(query: &QueryParams) -> Self {
        Self {
            identifier: query.get("phone").to_string(),
            channel: OtpChannel::default(),
        }
    }
}

/// # Errors
/// Returns a validation error when the identifier is blank.
pub fn prepare(ctx: &AuthorizeContext, form: &OtpRequestForm) -> Result<OtpCodeRequest, FlowError> {
    let phone = form.identifier.trim();
    if phone.is_empty() {
        return Err(FlowError::validation(MISSING_IDENTIFIER));
    }

    Ok(OtpCodeRequest {
        phone: phone.to_string(),
        channel: form.channel,
        state: ctx.state.clone(),
    })
}

pub async fn submit<A: AuthApi>(api: &A, request: &OtpCodeRequest) -> SubmissionOutcome {
    match client::request_otp(api, request).await {
        Ok(response) => SubmissionOutcome::confirmed(response.message, OTP_ACCEPTED),
        Err(err) => {
            debug!(channel = request.channel.as_str(), "otp request failed: {err}");
            SubmissionOutcome::Failure(FlowError::transport(&err, OTP_REQUEST_FAILED))
        }
    }
}

/// Link to the verify page carrying the identifier typed so far.
pub fn verify_link(ctx: &AuthorizeContext, identifier: &str) -> String {
    ctx.link(paths::OTP_VERIFY, &[("phone", identifier.trim())])
}
