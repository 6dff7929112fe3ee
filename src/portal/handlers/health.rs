use crate::{GIT_COMMIT_HASH, portal::PortalState};
use axum::{
    body::Body,
    extract::Extension,
    http::{HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    commit: String,
    name: String,
    version: String,
    assets: String,
    backend: String,
}

// axum handler for health
pub async fn health(method: Method, state: Extension<Arc<PortalState>>) -> impl IntoResponse {
    let index = state.index_html();
    let assets_ok = tokio::fs::metadata(&index)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false);

    let health = Health {
        commit: GIT_COMMIT_HASH.to_string(),
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        assets: if assets_ok {
            "ok".to_string()
        } else {
            "missing".to_string()
        },
        backend: if state.proxy.is_some() {
            "proxy".to_string()
        } else {
            "none".to_string()
        },
    };

    let body = if method == Method::GET {
        Json(&health).into_response()
    } else {
        Body::empty().into_response()
    };

    let short_hash = if health.commit.len() > 7 {
        &health.commit[0..7]
    } else {
        ""
    };

    let headers = format!("{}:{}:{}", health.name, health.version, short_hash)
        .parse::<HeaderValue>()
        .map(|x_app_header_value| {
            debug!("X-App header: {:?}", x_app_header_value);

            let mut headers = HeaderMap::new();

            headers.insert("X-App", x_app_header_value);

            headers
        })
        .map_err(|err| {
            error!("Failed to parse X-App header: {}", err);
        });

    // Unwrap the headers or provide a default value (empty headers) in case of an error
    let headers = headers.unwrap_or_else(|()| HeaderMap::new());

    if assets_ok {
        (StatusCode::OK, headers, body)
    } else {
        debug!("index.html not found at {}", index.display());

        (StatusCode::SERVICE_UNAVAILABLE, headers, body)
    }
}
