//! Auth feature module: the authorize context carried in URLs, the password
//! policy, backend endpoint wrappers, the shared submission state machine and
//! one protocol module per page.
//!
//! Flow overview: a relying party sends the browser to `/login` (or `/`) with
//! `state`, `client_id`, `return_to` and `scope`. Every page forwards those
//! parameters on its links. Password login, registration and OTP verification
//! finish with a full-page redirect to the backend's `authorize_url`, or to
//! `return_to` when the backend returns none. OTP request and password reset
//! only confirm inline. This module touches credentials and must never log
//! request payloads.

pub mod client;
pub mod flows;
pub mod liveness;
pub mod machine;
pub mod password;
pub mod query;
pub mod types;
