use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Output format for log lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

fn env_filter(verbosity_level: Level) -> Result<EnvFilter> {
    Ok(EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy()
        .add_directive("hyper=error".parse()?)
        .add_directive("tokio=error".parse()?)
        .add_directive("reqwest=warn".parse()?))
}

/// Initialize logging.
///
/// `RUST_LOG` directives are honored on top of the verbosity level.
///
/// # Errors
///
/// Returns an error if the filter directives are invalid or a global subscriber is already set
pub fn init(verbosity_level: Option<Level>, format: LogFormat) -> Result<()> {
    let filter = env_filter(verbosity_level.unwrap_or(Level::ERROR))?;

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_file(false)
                .with_line_number(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_target(false)
                .pretty();
            let subscriber = Registry::default().with(fmt_layer).with(filter);
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_target(false);
            let subscriber = Registry::default().with(fmt_layer).with(filter);
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_defaults_to_level() {
        temp_env::with_var("RUST_LOG", None::<&str>, || {
            let filter = env_filter(Level::INFO);
            assert!(filter.is_ok());
            if let Ok(filter) = filter {
                let rendered = filter.to_string();
                assert!(rendered.contains("info"), "unexpected filter: {rendered}");
                assert!(rendered.contains("hyper=error"), "unexpected filter: {rendered}");
            }
        });
    }

    #[test]
    fn test_env_filter_accepts_rust_log() {
        temp_env::with_var("RUST_LOG", Some("authportal=debug"), || {
            let filter = env_filter(Level::ERROR);
            assert!(filter.is_ok());
            if let Ok(filter) = filter {
                assert!(filter.to_string().contains("authportal=debug"));
            }
        });
    }
}
