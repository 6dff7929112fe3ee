//! # Authportal (Sign-in Front End Host)
//!
//! `authportal` serves the `authportal-web` bundle: the login, registration,
//! one-time-code and password-reset pages that sit in front of the OAuth
//! authorize flow.
//!
//! ## Responsibilities
//!
//! - **Static assets:** Any path that is not a file in the assets directory falls
//!   back to `index.html`, so full-page redirects to `/login`, `/otp/verify` or
//!   `/error` always load the app and the client decides which page to render.
//! - **Runtime config:** `/config.js` publishes `window.AUTHPORTAL_CONFIG` so one
//!   bundle can be pointed at different auth backends without a rebuild.
//! - **Same-origin API:** When a backend URL is configured, `/auth/*` is proxied to
//!   it. Session cookies set by the backend then land on the portal origin.
//!
//! The host never inspects credentials or tokens passing through the proxy and
//! must not log request bodies.

pub mod cli;
pub mod portal;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
