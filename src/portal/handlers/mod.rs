pub mod config_js;
pub mod health;
pub mod proxy;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

/// JSON error body in the same `{error, error_description}` shape the auth
/// backend uses, so the web client parses portal and backend failures alike.
pub fn error_response(status: StatusCode, error: &str, description: &str) -> Response {
    (
        status,
        Json(json!({
            "error": error,
            "error_description": description,
        })),
    )
        .into_response()
}
