//! Routes `tracing` events to the browser console through `tracing-web`, which
//! picks the `console.*` method matching each event's level.

use tracing::Level;
use tracing_subscriber::{Registry, filter::LevelFilter, fmt, layer::SubscriberExt};
use tracing_web::MakeWebConsoleWriter;

/// Installs the console subscriber. Safe to call once per page load.
pub fn init(level: Level) {
    let fmt_layer = fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_writer(MakeWebConsoleWriter::new());

    let subscriber = Registry::default()
        .with(fmt_layer)
        .with(LevelFilter::from_level(level));

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        tracing::warn!("Console logging already initialized: {err}");
    }
}
