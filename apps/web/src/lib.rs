//! Sign-in pages for the OAuth authorize flow.
//!
//! The bundle renders one of a fixed set of pages (login, register, forgot
//! password, one-time-code request and verify, error, not found) depending on
//! the current path. Every page reads the authorize context (`state`,
//! `return_to`, `client_id`, `scope`) from the URL, forwards it on every link and
//! redirect, and talks to the auth backend with cookies included. Tokens are
//! never read or stored here; the backend issues `HttpOnly` session cookies.
//!
//! Flow logic lives in [`features::auth`] and compiles on every target so it can
//! be unit-tested natively. Views and browser glue are `wasm32` only.

#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod features;
pub mod routes;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

/// Installs the panic hook and console logging, then mounts the app.
#[cfg(target_arch = "wasm32")]
pub fn mount() {
    console_error_panic_hook::set_once();

    let config = app_lib::config::AppConfig::load();
    app_lib::telemetry::init(config.level());
    tracing::debug!(
        commit = app_lib::build_info::git_commit_hash(),
        "authportal-web starting"
    );

    leptos::prelude::mount_to_body(app::App);
}
