//! Domain-level frontend features. Routes import these modules to keep view code
//! focused on rendering while flow rules and API handling stay testable.

pub mod auth;
