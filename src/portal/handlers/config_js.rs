use crate::portal::{PortalState, UiConfig, handlers::error_response};
use axum::{
    extract::Extension,
    http::{
        StatusCode,
        header::{CACHE_CONTROL, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::error;

/// Global the web bundle reads its runtime overrides from.
pub const CONFIG_GLOBAL: &str = "AUTHPORTAL_CONFIG";

/// Render the browser config script.
///
/// # Errors
/// Returns an error if the config cannot be encoded as JSON.
pub fn render_config_script(ui: &UiConfig) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(ui)?;
    Ok(format!("window.{CONFIG_GLOBAL} = {json};\n"))
}

// axum handler for /config.js
pub async fn config_js(state: Extension<Arc<PortalState>>) -> Response {
    match render_config_script(&state.config.ui) {
        Ok(script) => (
            [
                (CONTENT_TYPE, "application/javascript; charset=utf-8"),
                (CACHE_CONTROL, "no-store"),
            ],
            script,
        )
            .into_response(),
        Err(err) => {
            error!("Failed to render config.js: {}", err);

            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "server_error",
                "Runtime configuration is unavailable.",
            )
        }
    }
}
