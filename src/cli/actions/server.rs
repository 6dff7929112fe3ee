use crate::portal::{self, PortalConfig, UiConfig};
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, warn};
use url::Url;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub assets_dir: PathBuf,
    pub backend_url: Option<Url>,
    pub api_base_url: Option<String>,
    pub ui_log_level: Option<String>,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the proxy client cannot be built or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    if !args.assets_dir.join("index.html").is_file() {
        warn!(
            "No index.html in {}; /health will report 503 until the web bundle is built",
            args.assets_dir.display()
        );
    }

    match &args.backend_url {
        Some(url) => debug!("Proxying /auth/* to {url}"),
        None => debug!("No backend configured; /auth/* answers 503"),
    }

    let config = PortalConfig {
        assets_dir: args.assets_dir,
        backend_url: args.backend_url,
        ui: UiConfig {
            api_base_url: args.api_base_url,
            log_level: args.ui_log_level,
        },
    };

    portal::new(args.port, config).await
}
