//! Transport seam for the auth backend. Flow code is generic over [`AuthApi`]
//! so it runs against the browser client in production and an in-memory fake
//! in tests. Helpers here are pure: URL joining, error-body extraction and
//! tolerant decoding of empty success bodies.

use super::errors::AppError;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Maximum number of error body characters surfaced to the UI.
pub const MAX_ERROR_CHARS: usize = 200;

/// JSON fields checked, in order, for a human-readable error.
const ERROR_MESSAGE_FIELDS: [&str; 3] = ["error_description", "error", "message"];

/// One request per call; implementations must not retry or time out locally.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError>;

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError>;
}

/// Builds a URL from an explicit base URL and the provided path. Absolute
/// `http(s)` paths are returned unchanged.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() || path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Extracts the message from a backend error body shaped like
/// `{"error": "...", "error_description": "..."}`. Non-JSON bodies yield `None`.
pub fn error_message_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body.trim()).ok()?;
    let object = value.as_object()?;

    ERROR_MESSAGE_FIELDS
        .iter()
        .filter_map(|field| object.get(*field).and_then(Value::as_str))
        .find_map(sanitize_message)
}

/// Decodes a 2xx body. An empty body decodes as `{}` so response types made of
/// optional fields accept `204`-style replies.
pub fn decode_json_body<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    let trimmed = body.trim();
    let source = if trimmed.is_empty() { "{}" } else { trimmed };

    serde_json::from_str(source)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

/// Trims and truncates a message; blank messages are dropped.
fn sanitize_message(message: &str) -> Option<String> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_ERROR_CHARS).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn build_url_with_base_joins_paths() {
        assert_eq!(
            build_url_with_base("https://api.example.com/", "/auth/password/login"),
            "https://api.example.com/auth/password/login"
        );
        assert_eq!(
            build_url_with_base("https://api.example.com", "auth/otp/verify"),
            "https://api.example.com/auth/otp/verify"
        );
    }

    #[test]
    fn build_url_with_base_same_origin_when_empty() {
        assert_eq!(
            build_url_with_base("  ", "/auth/oauth/providers"),
            "/auth/oauth/providers"
        );
    }

    #[test]
    fn build_url_with_base_passes_absolute_urls() {
        assert_eq!(
            build_url_with_base("https://api.example.com", "https://other.example.com/x"),
            "https://other.example.com/x"
        );
    }

    #[test]
    fn error_message_prefers_description() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid credentials"}"#;
        assert_eq!(
            error_message_from_body(body),
            Some("Invalid credentials".to_string())
        );
    }

    #[test]
    fn error_message_falls_back_to_code_then_message() {
        assert_eq!(
            error_message_from_body(r#"{"error":"rate_limited","error_description":"  "}"#),
            Some("rate_limited".to_string())
        );
        assert_eq!(
            error_message_from_body(r#"{"message":"Try again later"}"#),
            Some("Try again later".to_string())
        );
    }

    #[test]
    fn error_message_ignores_non_json_and_empty() {
        assert_eq!(error_message_from_body("<html>Bad Gateway</html>"), None);
        assert_eq!(error_message_from_body(""), None);
        assert_eq!(error_message_from_body(r#"{"detail":"x"}"#), None);
        assert_eq!(error_message_from_body(r#"["error"]"#), None);
    }

    #[test]
    fn error_message_is_truncated() {
        let long = "x".repeat(MAX_ERROR_CHARS + 50);
        let body = format!(r#"{{"error_description":"{long}"}}"#);
        let message = error_message_from_body(&body).unwrap_or_default();
        assert_eq!(message.chars().count(), MAX_ERROR_CHARS);
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Reply {
        message: Option<String>,
    }

    #[test]
    fn decode_json_body_accepts_empty_body() {
        let reply: Reply = decode_json_body("  ").expect("empty body decodes");
        assert_eq!(reply, Reply { message: None });
    }

    #[test]
    fn decode_json_body_reports_parse_errors() {
        let result: Result<Reply, AppError> = decode_json_body("not json");
        assert!(matches!(result, Err(AppError::Parse(_))));
    }
}
