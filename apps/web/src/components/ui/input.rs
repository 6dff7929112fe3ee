//! Labelled text input bound to a page signal. Field values are never cleared
//! by the flow; only the user edits them.

use leptos::prelude::*;

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";

#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
    /// HTML `pattern`, `minlength` and `title`, for password fields.
    #[prop(optional)]
    pattern: Option<&'static str>,
    #[prop(optional)] minlength: Option<usize>,
    #[prop(optional)] title: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div>
            <label
                class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                for=id
            >
                {label}
            </label>
            <input
                id=id
                name=id
                type=input_type.unwrap_or("text")
                class=INPUT_CLASS
                autocomplete=autocomplete
                placeholder=placeholder
                pattern=pattern
                minlength=minlength.map(|length| length.to_string())
                title=title
                required=required
                prop:value=move || value.get()
                on:input=move |event| value.set(event_target_value(&event))
            />
        </div>
    }
}
