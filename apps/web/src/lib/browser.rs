//! Thin wrappers over `window.location`. Navigation is always a full page load so
//! the authorize context only ever travels in URLs.

use tracing::{debug, error};

fn location() -> Option<web_sys::Location> {
    web_sys::window().map(|window| window.location())
}

pub fn current_path() -> String {
    location()
        .and_then(|location| location.pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn current_search() -> String {
    location()
        .and_then(|location| location.search().ok())
        .unwrap_or_default()
}

pub fn current_origin() -> String {
    location()
        .and_then(|location| location.origin().ok())
        .unwrap_or_default()
}

/// Replaces the current page with `target`.
pub fn navigate(target: &str) {
    let Some(location) = location() else {
        error!("No window available for navigation");
        return;
    };

    debug!(target, "navigating");
    if let Err(err) = location.set_href(target) {
        error!("Navigation failed: {err:?}");
    }
}
