//! Shared frontend utilities for API access, configuration, errors, logging and
//! build metadata.
//!
//! All backend traffic goes through [`api::AuthApi`]. The browser implementation
//! ([`http::HttpApi`]) always sends cookies and never attaches credentials of
//! its own, so session state stays in `HttpOnly` cookies owned by the backend.
//! Callers must still avoid logging request payloads: they carry passwords and
//! one-time codes.

pub mod api;
pub mod build_info;
#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod config;
pub mod errors;
#[cfg(target_arch = "wasm32")]
pub mod http;
#[cfg(target_arch = "wasm32")]
pub mod telemetry;

pub use api::AuthApi;
pub use errors::AppError;
