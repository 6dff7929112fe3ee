//! Same-origin reverse proxy for the auth backend.
//!
//! The browser talks to `/auth/*` on the portal origin; requests are forwarded
//! to the configured backend with method, path, query, body and end-to-end
//! headers intact. `Host` is forwarded as sent by the browser so the backend
//! scopes its session cookies to the portal domain. Redirects are never
//! followed here; they are relayed to the browser. Bodies are never logged.

use crate::{
    APP_USER_AGENT,
    portal::{PortalState, handlers::error_response},
};
use anyhow::{Context, Result};
use axum::{
    body::{Body, to_bytes},
    extract::Extension,
    http::{
        HeaderMap, HeaderName, Request, StatusCode,
        header::{self, CONTENT_LENGTH},
        uri::PathAndQuery,
    },
    response::{IntoResponse, Response},
};
use reqwest::{Client, redirect::Policy};
use std::sync::Arc;
use tracing::{debug, error, warn};
use url::Url;

/// Largest request body forwarded to the backend.
pub const MAX_PROXY_BODY_BYTES: usize = 1024 * 1024;

const HOP_BY_HOP: [HeaderName; 7] = [
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

#[derive(Debug, Clone)]
pub struct Proxy {
    client: Client,
    base: Url,
}

impl Proxy {
    /// Build a proxy for `base`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base: Url) -> Result<Self> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .redirect(Policy::none())
            .build()
            .context("Failed to build reqwest client")?;

        Ok(Self { client, base })
    }
}

/// Join the backend base URL with the incoming path and query. A base path
/// prefix is kept: `http://backend/api` + `/auth/x` gives `http://backend/api/auth/x`.
#[must_use]
pub fn target_url(base: &Url, path_and_query: &str) -> String {
    let base = base.as_str().trim_end_matches('/');
    if path_and_query.starts_with('/') {
        format!("{base}{path_and_query}")
    } else {
        format!("{base}/{path_and_query}")
    }
}

/// Remove hop-by-hop headers, including any listed in `Connection`.
pub fn strip_hop_by_hop(headers: &mut HeaderMap) {
    let listed: Vec<HeaderName> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .filter_map(|name| HeaderName::from_bytes(name.trim().as_bytes()).ok())
        .collect();

    for name in listed {
        headers.remove(name);
    }
    for name in &HOP_BY_HOP {
        headers.remove(name);
    }
    headers.remove("keep-alive");
}

// axum handler for /auth/*
pub async fn proxy(state: Extension<Arc<PortalState>>, request: Request<Body>) -> Response {
    let Some(proxy) = state.proxy.as_ref() else {
        debug!("Rejecting {} without a backend", request.uri().path());

        return error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "backend_unavailable",
            "The auth backend is not configured.",
        );
    };

    let (parts, body) = request.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map_or("/", PathAndQuery::as_str);
    let url = target_url(&proxy.base, path_and_query);

    let body = match to_bytes(body, MAX_PROXY_BODY_BYTES).await {
        Ok(body) => body,
        Err(err) => {
            warn!("Rejecting oversized request body: {}", err);

            return error_response(
                StatusCode::PAYLOAD_TOO_LARGE,
                "payload_too_large",
                "Request body is too large.",
            );
        }
    };

    let mut headers = parts.headers;
    strip_hop_by_hop(&mut headers);
    headers.remove(CONTENT_LENGTH);

    let upstream = match proxy
        .client
        .request(parts.method, url)
        .headers(headers)
        .body(body)
        .send()
        .await
    {
        Ok(upstream) => upstream,
        Err(err) => {
            error!("Backend request failed: {}", err);

            return bad_gateway();
        }
    };

    let status = upstream.status();
    let mut headers = upstream.headers().clone();
    strip_hop_by_hop(&mut headers);
    headers.remove(CONTENT_LENGTH);

    match upstream.bytes().await {
        Ok(bytes) => (status, headers, bytes).into_response(),
        Err(err) => {
            error!("Failed to read backend response: {}", err);

            bad_gateway()
        }
    }
}

fn bad_gateway() -> Response {
    error_response(
        StatusCode::BAD_GATEWAY,
        "bad_gateway",
        "The auth backend could not be reached.",
    )
}
