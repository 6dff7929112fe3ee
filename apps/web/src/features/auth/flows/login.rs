//! Password login and OAuth provider sign-in.

use crate::{
    app_lib::AuthApi,
    features::auth::{
        client,
        machine::{FlowError, SubmissionOutcome},
        password::validate_password,
        query::AuthorizeContext,
        types::{OAuthProvider, PasswordLoginRequest},
    },
};
use tracing::debug;
use url::form_urlencoded;

pub const DEFAULT_SCOPE: &str = "openid email profile";
pub const MISSING_STATE: &str = "Missing state. Please retry from the OAuth authorize flow.";
pub const LOGIN_FAILED: &str = "Login failed.";
pub const OAUTH_START_FAILED: &str = "OAuth start failed.";

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Scope requested for both password and provider sign-in.
pub fn scope(ctx: &AuthorizeContext) -> &str {
    ctx.scope.as_deref().unwrap_or(DEFAULT_SCOPE)
}

/// Requires `state`, then checks the password policy.
///
/// # Errors
/// Returns a validation error naming the first failed check.
pub fn prepare(ctx: &AuthorizeContext, form: &LoginForm) -> Result<PasswordLoginRequest, FlowError> {
    let state = ctx
        .state
        .clone()
        .ok_or_else(|| FlowError::validation(MISSING_STATE))?;
    validate_password(&form.password)?;

    Ok(PasswordLoginRequest {
        email: form.email.trim().to_string(),
        password: form.password.clone(),
        scope: scope(ctx).to_string(),
        state,
    })
}

pub async fn submit<A: AuthApi>(
    api: &A,
    ctx: &AuthorizeContext,
    request: &PasswordLoginRequest,
) -> SubmissionOutcome {
    match client::password_login(api, request).await {
        Ok(response) => SubmissionOutcome::redirect(response.authorize_url, ctx),
        Err(err) => {
            debug!("password login failed: {err}");
            SubmissionOutcome::Failure(FlowError::transport(&err, LOGIN_FAILED))
        }
    }
}

/// Providers to offer on the login page. Discovery is best effort: any
/// failure yields an empty list and the page simply shows no provider buttons.
pub async fn discover_providers<A: AuthApi>(api: &A) -> Vec<OAuthProvider> {
    match client::fetch_providers(api).await {
        Ok(providers) => providers,
        Err(err) => {
            debug!("provider discovery failed: {err}");
            Vec::new()
        }
    }
}

/// Absolute callback URL the provider returns to, carrying the provider name
/// and the final `return_to` destination.
pub fn callback_url(origin: &str, ctx: &AuthorizeContext, provider: &OAuthProvider) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("provider", &provider.name)
        .append_pair("redirect_uri", ctx.return_target())
        .finish();
    format!(
        "{}{}?{query}",
        origin.trim_end_matches('/'),
        client::OAUTH_CALLBACK_PATH
    )
}

/// Backend path that starts the provider flow.
pub fn start_path(origin: &str, ctx: &AuthorizeContext, provider: &OAuthProvider) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("provider", &provider.name)
        .append_pair("redirect_uri", &callback_url(origin, ctx, provider))
        .append_pair("scope", scope(ctx))
        .finish();
    format!("{}?{query}", client::OAUTH_START_PATH)
}

/// Resolves the provider's authorization URL to navigate to.
///
/// # Errors
/// Returns a transport error when the backend call fails.
pub async fn start_provider<A: AuthApi>(
    api: &A,
    origin: &str,
    ctx: &AuthorizeContext,
    provider: &OAuthProvider,
) -> Result<String, FlowError> {
    let path = start_path(origin, ctx, provider);
    match client::start_oauth(api, &path).await {
        Ok(response) if !response.authorization_url.trim().is_empty() => {
            Ok(response.authorization_url)
        }
        Ok(_) => Err(FlowError::Transport(OAUTH_START_FAILED.to_string())),
        Err(err) => {
            debug!(provider = %provider.name, "oauth start failed: {err}");
            Err(FlowError::transport(&err, OAUTH_START_FAILED))
        }
    }
}

/// Provider sign-in as a submission: it holds the same gate as the password
/// form, and a failure returns the page to idle with an inline error.
pub async fn select_provider<A: AuthApi>(
    api: &A,
    origin: &str,
    ctx: &AuthorizeContext,
    provider: &OAuthProvider,
) -> SubmissionOutcome {
    match start_provider(api, origin, ctx, provider).await {
        Ok(target) => SubmissionOutcome::Redirect { target },
        Err(err) => SubmissionOutcome::Failure(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app_lib::AppError,
        features::auth::{
            flows::fake::FakeApi,
            machine::FlowState,
            query::{AuthorizeContext, QueryParams},
        },
    };
    use serde_json::json;

    fn context(search: &str) -> AuthorizeContext {
        AuthorizeContext::from_query(&QueryParams::parse(search))
    }

    fn form(password: &str) -> LoginForm {
        LoginForm {
            email: " ada@example.com ".to_string(),
            password: password.to_string(),
        }
    }

    fn github() -> OAuthProvider {
        OAuthProvider {
            name: "github".to_string(),
            display_name: Some("GitHub".to_string()),
            icon_url: None,
        }
    }

    #[test]
    fn prepare_requires_state_before_password() {
        let result = prepare(&context("?client_id=c1"), &form("weak"));
        assert_eq!(result.err(), Some(FlowError::validation(MISSING_STATE)));
    }

    #[test]
    fn prepare_checks_password_policy() {
        let result = prepare(&context("?state=s1"), &form("password"));
        assert!(matches!(result, Err(FlowError::Validation(message)) if message.starts_with("Password must be")));
    }

    #[test]
    fn prepare_defaults_scope() {
        let request = prepare(&context("?state=s1"), &form("Secret!12")).expect("valid");
        assert_eq!(request.email, "ada@example.com");
        assert_eq!(request.scope, DEFAULT_SCOPE);
        assert_eq!(request.state, "s1");

        let request =
            prepare(&context("?state=s1&scope=openid"), &form("Secret!12")).expect("valid");
        assert_eq!(request.scope, "openid");
    }

    #[tokio::test]
    async fn submit_redirects_to_authorize_url() {
        let api = FakeApi::new().respond(
            client::PASSWORD_LOGIN_PATH,
            json!({"access_token": "at", "token_type": "Bearer", "expires_in": 3600, "authorize_url": "https://idp/authorize?code=1"}),
        );
        let ctx = context("?state=s1&return_to=%2Fapp");
        let request = prepare(&ctx, &form("Secret!12")).expect("valid");

        let outcome = submit(&api, &ctx, &request).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Redirect {
                target: "https://idp/authorize?code=1".to_string()
            }
        );
        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "POST");
        assert_eq!(
            calls[0].body,
            Some(json!({
                "email": "ada@example.com",
                "password": "Secret!12",
                "scope": "openid email profile",
                "state": "s1"
            }))
        );
    }

    #[tokio::test]
    async fn submit_falls_back_to_return_to() {
        let api = FakeApi::new().respond(client::PASSWORD_LOGIN_PATH, json!({"access_token": "at"}));
        let ctx = context("?state=s1&return_to=%2Fapp");
        let request = prepare(&ctx, &form("Secret!12")).expect("valid");

        assert_eq!(
            submit(&api, &ctx, &request).await,
            SubmissionOutcome::Redirect {
                target: "/app".to_string()
            }
        );
    }

    #[tokio::test]
    async fn submit_surfaces_backend_error() {
        let api = FakeApi::new().fail(
            client::PASSWORD_LOGIN_PATH,
            AppError::Http {
                status: 401,
                message: Some("Invalid credentials".to_string()),
            },
        );
        let ctx = context("?state=s1");
        let request = prepare(&ctx, &form("Secret!12")).expect("valid");

        assert_eq!(
            submit(&api, &ctx, &request).await,
            SubmissionOutcome::Failure(FlowError::Transport("Invalid credentials".to_string()))
        );
    }

    #[tokio::test]
    async fn submit_uses_fallback_without_message() {
        let api = FakeApi::new().fail(
            client::PASSWORD_LOGIN_PATH,
            AppError::Network("offline".to_string()),
        );
        let ctx = context("?state=s1");
        let request = prepare(&ctx, &form("Secret!12")).expect("valid");

        assert_eq!(
            submit(&api, &ctx, &request).await,
            SubmissionOutcome::Failure(FlowError::Transport(LOGIN_FAILED.to_string()))
        );
    }

    #[tokio::test]
    async fn discover_providers_swallows_errors() {
        let api = FakeApi::new().fail(
            client::PROVIDERS_PATH,
            AppError::Http {
                status: 500,
                message: None,
            },
        );
        assert!(discover_providers(&api).await.is_empty());
    }

    #[tokio::test]
    async fn discover_providers_decodes_list() {
        let api = FakeApi::new().respond(
            client::PROVIDERS_PATH,
            json!([{"Name": "github", "DisplayName": "GitHub"}, {"Name": "google"}]),
        );
        let providers = discover_providers(&api).await;
        let labels: Vec<String> = providers.iter().map(OAuthProvider::label).collect();
        assert_eq!(labels, vec!["GitHub", "Google"]);
    }

    #[test]
    fn start_path_nests_callback() {
        let ctx = context("?state=s1&return_to=%2Fapp");
        let path = start_path("https://login.example.com/", &ctx, &github());

        assert!(path.starts_with("/auth/oauth/start?"));
        let query = QueryParams::parse(path.split_once('?').map_or("", |(_, query)| query));
        assert_eq!(query.get("provider"), "github");
        assert_eq!(query.get("scope"), DEFAULT_SCOPE);
        assert_eq!(
            query.get("redirect_uri"),
            "https://login.example.com/auth/oauth/callback?provider=github&redirect_uri=%2Fapp"
        );
    }

    #[tokio::test]
    async fn start_provider_returns_authorization_url() {
        let api = FakeApi::new().respond(
            client::OAUTH_START_PATH,
            json!({"authorization_url": "https://github.com/login/oauth/authorize?x=1"}),
        );
        let target = start_provider(&api, "https://login.example.com", &context(""), &github()).await;

        assert_eq!(
            target,
            Ok("https://github.com/login/oauth/authorize?x=1".to_string())
        );
        let calls = api.calls();
        assert_eq!(calls[0].method, "GET");
        assert!(calls[0].path.contains("redirect_uri=https%3A%2F%2Flogin.example.com%2Fauth%2Foauth%2Fcallback%3Fprovider%3Dgithub%26redirect_uri%3D%252F"));
    }

    #[tokio::test]
    async fn start_provider_reports_failure() {
        let api = FakeApi::new().fail(
            client::OAUTH_START_PATH,
            AppError::Network("offline".to_string()),
        );
        let result = start_provider(&api, "https://login.example.com", &context(""), &github()).await;
        assert_eq!(
            result,
            Err(FlowError::Transport(OAUTH_START_FAILED.to_string()))
        );
    }

    #[tokio::test]
    async fn provider_start_holds_submission_gate() {
        let api = FakeApi::new().fail(
            client::OAUTH_START_PATH,
            AppError::Network("offline".to_string()),
        );
        let mut flow = FlowState::default();
        assert!(flow.begin());
        assert!(!flow.begin(), "second click or form submit must be refused");

        let outcome = select_provider(&api, "https://login.example.com", &context(""), &github()).await;

        assert_eq!(flow.settle(outcome), None);
        assert!(!flow.is_busy());
        assert_eq!(
            flow.last_error().map(FlowError::message),
            Some(OAUTH_START_FAILED)
        );
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn provider_start_redirects() {
        let api = FakeApi::new().respond(
            client::OAUTH_START_PATH,
            json!({"authorization_url": "https://github.com/login/oauth/authorize"}),
        );
        let mut flow = FlowState::default();
        assert!(flow.begin());

        let outcome = select_provider(&api, "https://login.example.com", &context(""), &github()).await;

        assert_eq!(
            flow.settle(outcome).as_deref(),
            Some("https://github.com/login/oauth/authorize")
        );
        assert!(flow.is_busy());
    }
}
