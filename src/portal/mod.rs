use crate::portal::handlers::{config_js, health, proxy};
use anyhow::{Context, Result};
use axum::{
    Extension, Router,
    body::Body,
    extract::MatchedPath,
    http::{HeaderName, HeaderValue, Request},
    routing::{any, get},
};
use serde::Serialize;
use std::{path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::PropagateRequestIdLayer,
    services::{ServeDir, ServeFile},
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{Span, info, info_span};
use ulid::Ulid;
use url::Url;

pub mod handlers;

pub use handlers::config_js::render_config_script;
pub use handlers::proxy::target_url;

/// Runtime settings for the portal host.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub assets_dir: PathBuf,
    pub backend_url: Option<Url>,
    pub ui: UiConfig,
}

/// Browser-facing settings rendered into `/config.js`. Absent values are omitted
/// so the bundle keeps its build-time defaults.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// Shared state handed to every handler.
#[derive(Debug)]
pub struct PortalState {
    pub config: PortalConfig,
    pub proxy: Option<proxy::Proxy>,
}

impl PortalState {
    #[must_use]
    pub fn index_html(&self) -> PathBuf {
        self.config.assets_dir.join("index.html")
    }
}

/// Build the portal router: health, runtime config, the `/auth/*` proxy and the
/// static bundle with an `index.html` fallback.
///
/// # Errors
/// Returns an error if the proxy HTTP client cannot be built.
pub fn router(config: PortalConfig) -> Result<Router> {
    let proxy = config
        .backend_url
        .clone()
        .map(proxy::Proxy::new)
        .transpose()
        .context("Failed to build backend proxy")?;

    let assets = ServeDir::new(&config.assets_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(config.assets_dir.join("index.html")));

    let state = Arc::new(PortalState { config, proxy });

    let app = Router::new()
        .route("/health", get(health::health).options(health::health))
        .route("/config.js", get(config_js::config_js))
        .route("/auth/*path", any(proxy::proxy))
        .fallback_service(assets)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(Extension(state)),
        );

    Ok(app)
}

/// Start the server
/// # Errors
/// Return error if failed to start the server
pub async fn new(port: u16, config: PortalConfig) -> Result<()> {
    let app = router(config)?;

    let listener = TcpListener::bind(format!("::0:{port}"))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Gracefully shutdown");
        })
        .await?;

    Ok(())
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
        request_id
    )
}
