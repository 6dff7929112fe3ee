//! Message shown on the error page.

use crate::{features::auth::query::QueryParams, routes::paths};

pub const DEFAULT_MESSAGE: &str = "Something went wrong.";
pub const RECOVERY_PATH: &str = paths::LOGIN;

/// `error_description`, else `error`, else a generic message.
pub fn describe(query: &QueryParams) -> String {
    query
        .value("error_description")
        .or_else(|| query.value("error"))
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_string())
}
