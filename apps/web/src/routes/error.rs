use super::flow;
use crate::{
    components::{Alert, AlertKind, AuthLayout},
    features::auth::flows::error_page,
};
use leptos::prelude::*;

/// Shows an OAuth or backend error passed in the query string.
#[component]
pub fn ErrorPage() -> impl IntoView {
    let (query, _) = flow::page_context();
    let message = error_page::describe(&query);
    tracing::debug!(message = %message, "rendering error page");

    view! {
        <AuthLayout title="Sign-in error">
            <Alert kind=AlertKind::Error message=message />
            <a
                href=error_page::RECOVERY_PATH
                class="font-medium text-blue-600 hover:underline dark:text-blue-500"
            >
                "Back to sign in"
            </a>
        </AuthLayout>
    }
}
