//! Glue between page signals and the flow state machine.

use crate::{
    app_lib::browser,
    components::{Alert, AlertKind},
    features::auth::{
        liveness::Liveness,
        machine::{FlowError, FlowState, SubmissionOutcome},
        query::{AuthorizeContext, QueryParams},
    },
};
use leptos::prelude::*;
use tracing::debug;

/// Query parameters and authorize context of the current page.
pub(crate) fn page_context() -> (QueryParams, AuthorizeContext) {
    let query = QueryParams::parse(&browser::current_search());
    let ctx = AuthorizeContext::from_query(&query);
    (query, ctx)
}

/// A [`Liveness`] disposed when the page's owner is cleaned up.
pub(crate) fn page_liveness() -> Liveness {
    let liveness = Liveness::new();
    let on_dispose = liveness.clone();
    on_cleanup(move || on_dispose.dispose());
    liveness
}

/// Takes the submission gate. `false` means a submission is already running.
pub(crate) fn begin(state: RwSignal<FlowState>) -> bool {
    state.try_update(FlowState::begin).unwrap_or(false)
}

/// Applies `outcome` and navigates when it carries a target. Dropped when the
/// page is gone.
pub(crate) fn settle(state: RwSignal<FlowState>, liveness: &Liveness, outcome: SubmissionOutcome) {
    if !liveness.is_alive() {
        debug!(
            outcome = outcome.kind(),
            "page disposed, dropping submission result"
        );
        return;
    }

    if let Some(target) = state.try_update(|flow| flow.settle(outcome)).flatten() {
        browser::navigate(&target);
    }
}

/// Rejects locally after [`begin`]; no request is made.
pub(crate) fn reject(state: RwSignal<FlowState>, err: FlowError) {
    state.update(|flow| {
        flow.settle(SubmissionOutcome::Failure(err));
    });
}

/// Error and confirmation banners for the current state.
#[component]
pub(crate) fn FlowBanners(state: RwSignal<FlowState>) -> impl IntoView {
    view! {
        {move || {
            state
                .with(|flow| flow.last_error().map(|err| err.message().to_string()))
                .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
        }}
        {move || {
            state
                .with(|flow| flow.last_success().map(str::to_string))
                .map(|message| view! { <Alert kind=AlertKind::Success message=message /> })
        }}
    }
}

/// Footer link that keeps the authorize context.
#[component]
pub(crate) fn FlowLink(href: String, label: &'static str) -> impl IntoView {
    view! {
        <a class="font-medium text-blue-600 hover:underline dark:text-blue-500" href=href>
            {label}
        </a>
    }
}
