use leptos::prelude::*;

/// Inline progress indicator shown while a submission is in flight.
#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 text-sm text-gray-500 dark:text-gray-400">
            <div
                class="inline-block h-5 w-5 animate-spin rounded-full border-4 border-blue-200 border-t-blue-600"
                role="status"
                aria-live="polite"
                aria-label="Loading"
            ></div>
            {label}
        </div>
    }
}
