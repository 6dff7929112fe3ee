//! Client wrappers for the auth backend endpoints. Each wrapper is one request
//! through an [`AuthApi`]; there are no retries and no local timeouts.

use crate::{
    app_lib::{AppError, AuthApi},
    features::auth::types::{
        AuthResponse, ForgotPasswordRequest, MessageResponse, OAuthProvider, OAuthStartResponse,
        OtpCodeRequest, OtpVerifyRequest, PasswordLoginRequest, PasswordRegisterRequest,
    },
};

pub const PROVIDERS_PATH: &str = "/auth/oauth/providers";
pub const OAUTH_START_PATH: &str = "/auth/oauth/start";
pub const OAUTH_CALLBACK_PATH: &str = "/auth/oauth/callback";
pub const PASSWORD_LOGIN_PATH: &str = "/auth/password/login";
pub const PASSWORD_REGISTER_PATH: &str = "/auth/password/register";
pub const PASSWORD_FORGOT_PATH: &str = "/auth/password/forgot";
pub const OTP_REQUEST_PATH: &str = "/auth/otp/request";
pub const OTP_VERIFY_PATH: &str = "/auth/otp/verify";

/// Lists the OAuth providers offered on the login page.
pub async fn fetch_providers<A: AuthApi>(api: &A) -> Result<Vec<OAuthProvider>, AppError> {
    api.get_json(PROVIDERS_PATH).await
}

/// Asks the backend for the provider's authorization URL. `start_path` already
/// carries `provider`, `redirect_uri` and `scope`.
pub async fn start_oauth<A: AuthApi>(
    api: &A,
    start_path: &str,
) -> Result<OAuthStartResponse, AppError> {
    api.get_json(start_path).await
}

/// Password login. Session cookies are set by the response.
pub async fn password_login<A: AuthApi>(
    api: &A,
    request: &PasswordLoginRequest,
) -> Result<AuthResponse, AppError> {
    api.post_json(PASSWORD_LOGIN_PATH, request).await
}

/// Account registration. Session cookies are set by the response.
pub async fn password_register<A: AuthApi>(
    api: &A,
    request: &PasswordRegisterRequest,
) -> Result<AuthResponse, AppError> {
    api.post_json(PASSWORD_REGISTER_PATH, request).await
}

/// Starts a password reset. The backend answers the same way whether or not
/// the account exists.
pub async fn forgot_password<A: AuthApi>(
    api: &A,
    request: &ForgotPasswordRequest,
) -> Result<MessageResponse, AppError> {
    api.post_json(PASSWORD_FORGOT_PATH, request).await
}

/// Sends a one-time code over the chosen channel.
pub async fn request_otp<A: AuthApi>(
    api: &A,
    request: &OtpCodeRequest,
) -> Result<MessageResponse, AppError> {
    api.post_json(OTP_REQUEST_PATH, request).await
}

/// Exchanges a one-time code for a session.
pub async fn verify_otp<A: AuthApi>(
    api: &A,
    request: &OtpVerifyRequest,
) -> Result<AuthResponse, AppError> {
    api.post_json(OTP_VERIFY_PATH, request).await
}
