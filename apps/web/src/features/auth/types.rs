//! Request and response types for the auth backend. Request payloads carry
//! passwords and one-time codes, so their `Debug` output redacts those fields
//! and they must never be logged. Token fields in backend responses are ignored
//! during decoding: the backend sets `HttpOnly` cookies and the UI never holds
//! tokens.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

const REDACTED: &str = "<redacted>";

/// OAuth provider advertised by `GET /auth/oauth/providers`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OAuthProvider {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "DisplayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "IconURL", default)]
    pub icon_url: Option<String>,
}

impl OAuthProvider {
    /// Button label: the display name if set, else the capitalized name, else
    /// `"Provider"`.
    pub fn label(&self) -> String {
        if let Some(display_name) = self
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
        {
            return display_name.to_string();
        }

        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => "Provider".to_string(),
        }
    }

    /// Icon URL when one is set and non-blank.
    pub fn icon(&self) -> Option<&str> {
        self.icon_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct OAuthStartResponse {
    pub authorization_url: String,
}

/// Reply to password login, registration and OTP verification. Only the
/// optional redirect instruction is kept.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub authorize_url: Option<String>,
}

/// Reply to OTP request and forgot-password.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub message: Option<String>,
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|value| !value.trim().is_empty()))
}

#[derive(Clone, Serialize)]
pub struct PasswordLoginRequest {
    pub email: String,
    pub password: String,
    pub scope: String,
    pub state: String,
}

impl fmt::Debug for PasswordLoginRequest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PasswordLoginRequest")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("scope", &self.scope)
            .field("state", &self.state)
            .finish()
    }
}

#[derive(Clone, Serialize)]
pub struct PasswordRegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl fmt::Debug for PasswordRegisterRequest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PasswordRegisterRequest")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("name", &self.name)
            .field("client_id", &self.client_id)
            .field("state", &self.state)
            .finish()
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Delivery channel for a one-time code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpChannel {
    #[default]
    Sms,
    Email,
}

impl OtpChannel {
    pub const ALL: [OtpChannel; 2] = [OtpChannel::Sms, OtpChannel::Email];

    pub fn as_str(self) -> &'static str {
        match self {
            OtpChannel::Sms => "sms",
            OtpChannel::Email => "email",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OtpChannel::Sms => "SMS",
            OtpChannel::Email => "Email",
        }
    }

    /// Parses a `<select>` value; anything unknown is SMS.
    pub fn from_value(value: &str) -> Self {
        match value {
            "email" => OtpChannel::Email,
            _ => OtpChannel::Sms,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct OtpCodeRequest {
    /// Phone number or email; the backend names the field `phone` for both.
    pub phone: String,
    pub channel: OtpChannel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Clone, Serialize)]
pub struct OtpVerifyRequest {
    pub phone: String,
    pub code: String,
    pub client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl fmt::Debug for OtpVerifyRequest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OtpVerifyRequest")
            .field("phone", &self.phone)
            .field("code", &REDACTED)
            .field("client_id", &self.client_id)
            .field("scope", &self.scope)
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn provider(name: &str, display_name: Option<&str>) -> OAuthProvider {
        OAuthProvider {
            name: name.to_string(),
            display_name: display_name.map(str::to_string),
            icon_url: None,
        }
    }

    #[test]
    fn provider_decodes_backend_field_names() {
        let providers: Vec<OAuthProvider> = serde_json::from_value(json!([
            {"Name": "github", "DisplayName": "GitHub", "IconURL": "https://cdn/gh.svg"},
            {"Name": "google"}
        ]))
        .expect("providers decode");

        assert_eq!(providers.len(), 2);
        assert_eq!(providers[0].icon(), Some("https://cdn/gh.svg"));
        assert_eq!(providers[1].display_name, None);
    }

    #[test]
    fn provider_label_formats() {
        assert_eq!(provider("github", Some("GitHub")).label(), "GitHub");
        assert_eq!(provider("github", Some("  ")).label(), "Github");
        assert_eq!(provider("google", None).label(), "Google");
        assert_eq!(provider("", None).label(), "Provider");
    }

    #[test]
    fn auth_response_ignores_tokens_and_empty_url() {
        let response: AuthResponse = serde_json::from_value(json!({
            "access_token": "at",
            "refresh_token": "rt",
            "token_type": "Bearer",
            "expires_in": 3600,
            "authorize_url": ""
        }))
        .expect("auth response decodes");
        assert_eq!(response.authorize_url, None);

        let response: AuthResponse =
            serde_json::from_value(json!({"authorize_url": "https://idp/authorize?x=1"}))
                .expect("auth response decodes");
        assert_eq!(
            response.authorize_url.as_deref(),
            Some("https://idp/authorize?x=1")
        );
    }

    #[test]
    fn register_request_omits_absent_fields() {
        let request = PasswordRegisterRequest {
            email: "a@b.co".to_string(),
            password: "Secret!1".to_string(),
            name: None,
            client_id: Some("c1".to_string()),
            state: None,
        };
        assert_eq!(
            serde_json::to_value(&request).expect("encode"),
            json!({"email": "a@b.co", "password": "Secret!1", "client_id": "c1"})
        );
    }

    #[test]
    fn otp_channel_is_lowercase() {
        let request = OtpCodeRequest {
            phone: "+15550100".to_string(),
            channel: OtpChannel::Email,
            state: None,
        };
        assert_eq!(
            serde_json::to_value(&request).expect("encode"),
            json!({"phone": "+15550100", "channel": "email"})
        );
        assert_eq!(OtpChannel::from_value("carrier-pigeon"), OtpChannel::Sms);
    }

    #[test]
    fn debug_redacts_secrets() {
        let request = PasswordLoginRequest {
            email: "a@b.co".to_string(),
            password: "Secret!1".to_string(),
            scope: "openid".to_string(),
            state: "s1".to_string(),
        };
        let rendered = format!("{request:?}");
        assert!(!rendered.contains("Secret!1"));
        assert!(rendered.contains(REDACTED));

        let request = OtpVerifyRequest {
            phone: "+15550100".to_string(),
            code: "123456".to_string(),
            client_id: "c1".to_string(),
            scope: None,
            state: None,
        };
        assert!(!format!("{request:?}").contains("123456"));
    }
}
