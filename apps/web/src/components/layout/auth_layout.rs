use crate::app_lib::build_info::short_commit_hash;
use leptos::prelude::*;

/// Centered card with a heading, used by every flow page. The footer shows the
/// build's short commit hash.
#[component]
pub fn AuthLayout(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <main class="flex min-h-screen items-center justify-center bg-gray-50 px-4 py-10 dark:bg-gray-900">
            <div class="w-full max-w-md">
                <div class="rounded-lg border border-gray-200 bg-white p-6 shadow-sm dark:border-gray-700 dark:bg-gray-800">
                    <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{title}</h1>
                    {subtitle
                        .map(|text| {
                            view! {
                                <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">{text}</p>
                            }
                        })}
                    <div class="mt-6 space-y-4">{children()}</div>
                </div>
                <p class="mt-4 text-center text-xs text-gray-400">
                    "build " {short_commit_hash()}
                </p>
            </div>
        </main>
    }
}
