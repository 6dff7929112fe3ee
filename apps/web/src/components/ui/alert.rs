//! Inline banners for flow errors and confirmations. Messages come from
//! validation or the backend's error text and never include credentials.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub enum AlertKind {
    Error,
    Success,
}

#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let (class, role) = match kind {
        AlertKind::Error => (
            "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 dark:border-red-400 dark:bg-red-900/30 dark:text-red-200",
            "alert",
        ),
        AlertKind::Success => (
            "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 dark:border-emerald-400 dark:bg-emerald-900/30 dark:text-emerald-200",
            "status",
        ),
    };

    view! { <div class=class role=role>{message}</div> }
}
