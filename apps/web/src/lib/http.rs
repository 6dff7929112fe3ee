//! Browser transport for [`AuthApi`] built on `gloo-net`. Every request is sent
//! with `credentials: include` so the browser stores and replays the backend's
//! session cookies; nothing here reads or sets credentials itself.

use super::{
    api::{AuthApi, build_url_with_base, decode_json_body, error_message_from_body},
    config::AppConfig,
    errors::AppError,
};
use gloo_net::http::{Request, Response};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::RequestCredentials;

#[derive(Clone, Debug)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    fn url(&self, path: &str) -> String {
        build_url_with_base(&self.base_url, path)
    }
}

impl AuthApi for HttpApi {
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = Request::get(&self.url(path))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let payload = to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        let request = Request::post(&self.url(path))
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;
        let response = request.send().await.map_err(map_request_error)?;

        handle_json_response(response).await
    }
}

fn map_request_error(err: gloo_net::Error) -> AppError {
    AppError::Network(format!("Unable to reach the server: {err}"))
}

/// Parses JSON responses and surfaces HTTP errors with the backend's message.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        let body = response
            .text()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to read response: {err}")))?;
        decode_json_body(&body)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: error_message_from_body(&body),
        })
    }
}
