//! Query-string handling for the authorize context.
//!
//! Only `state`, `return_to`, `client_id` and `scope` survive from one page to
//! the next; everything else in the current URL is dropped when links are built.
//! Empty values are treated as absent and are never emitted.

use url::form_urlencoded;

/// Keys copied from the current URL onto every forwarded link, in output order.
pub const PRESERVED_KEYS: [&str; 4] = ["state", "return_to", "client_id", "scope"];

/// Where to land when the context has no `return_to`.
pub const DEFAULT_RETURN_TO: &str = "/";

/// Decoded query parameters of the current URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parses `search` with or without its leading `?`.
    pub fn parse(search: &str) -> Self {
        let raw = search.strip_prefix('?').unwrap_or(search);
        let pairs = form_urlencoded::parse(raw.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self { pairs }
    }

    /// Value of the first `name` parameter, or `""` when absent.
    pub fn get(&self, name: &str) -> &str {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map_or("", |(_, value)| value.as_str())
    }

    /// Like [`QueryParams::get`] but `None` for absent or empty values.
    pub fn value(&self, name: &str) -> Option<String> {
        let value = self.get(name);
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// The cross-page parameters of one authorization attempt. Built once per page
/// load and never mutated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorizeContext {
    pub state: Option<String>,
    pub return_to: Option<String>,
    pub client_id: Option<String>,
    pub scope: Option<String>,
}

impl AuthorizeContext {
    pub fn from_query(query: &QueryParams) -> Self {
        Self {
            state: query.value("state"),
            return_to: query.value("return_to"),
            client_id: query.value("client_id"),
            scope: query.value("scope"),
        }
    }

    /// Redirect target used when the backend returns no `authorize_url`.
    pub fn return_target(&self) -> &str {
        self.return_to.as_deref().unwrap_or(DEFAULT_RETURN_TO)
    }

    fn preserved(&self, key: &str) -> Option<&str> {
        match key {
            "state" => self.state.as_deref(),
            "return_to" => self.return_to.as_deref(),
            "client_id" => self.client_id.as_deref(),
            "scope" => self.scope.as_deref(),
            _ => None,
        }
    }

    /// Query string carrying the context to the next page, `""` or `"?..."`.
    ///
    /// Non-empty overrides replace a preserved key in place or are appended
    /// after it; empty overrides are ignored and never remove a key.
    pub fn forwarding_query(&self, overrides: &[(&str, &str)]) -> String {
        let mut entries: Vec<(&str, &str)> = PRESERVED_KEYS
            .iter()
            .filter_map(|key| self.preserved(key).map(|value| (*key, value)))
            .collect();

        for &(key, value) in overrides {
            if value.is_empty() {
                continue;
            }
            if let Some(entry) = entries.iter_mut().find(|entry| entry.0 == key) {
                entry.1 = value;
            } else {
                entries.push((key, value));
            }
        }

        if entries.is_empty() {
            return String::new();
        }

        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(entries)
            .finish();
        format!("?{encoded}")
    }

    /// `path` followed by the forwarding query.
    pub fn link(&self, path: &str, overrides: &[(&str, &str)]) -> String {
        format!("{path}{}", self.forwarding_query(overrides))
    }
}
