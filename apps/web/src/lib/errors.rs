use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    /// Non-2xx response. `message` is the human-readable text the backend put in
    /// its error body, if any.
    Http {
        status: u16,
        message: Option<String>,
    },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// Text supplied by the backend, if this is an HTTP error that carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Http {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Message to show the user: the backend's text, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Http {
                status,
                message: Some(message),
            } => write!(formatter, "Request failed ({status}): {message}"),
            AppError::Http {
                status,
                message: None,
            } => write!(formatter, "Request failed ({status})"),
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn user_message_prefers_server_text() {
        let err = AppError::Http {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.user_message("Login failed."), "Invalid credentials");
    }

    #[test]
    fn user_message_falls_back() {
        let http = AppError::Http {
            status: 500,
            message: None,
        };
        let network = AppError::Network("connection reset".to_string());
        assert_eq!(http.user_message("Login failed."), "Login failed.");
        assert_eq!(network.user_message("OTP request failed."), "OTP request failed.");
    }

    #[test]
    fn display_includes_status() {
        let err = AppError::Http {
            status: 503,
            message: None,
        };
        assert_eq!(err.to_string(), "Request failed (503)");
    }
}
