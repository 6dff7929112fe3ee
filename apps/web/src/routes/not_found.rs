//! Fallback for paths outside the sign-in flow.

use super::paths;
use crate::components::AuthLayout;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AuthLayout title="Page not found">
            <p class="text-sm text-gray-500 dark:text-gray-400">
                "The page you requested does not exist."
            </p>
            <a
                href=paths::LOGIN
                class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800"
            >
                "Go to sign in"
            </a>
        </AuthLayout>
    }
}
