use super::{
    flow::{self, FlowBanners, FlowLink},
    paths,
};
use crate::{
    app_lib::{config::AppConfig, http::HttpApi},
    components::{AuthLayout, Button, Spinner, TextField},
    features::auth::{
        flows::forgot_password::{self, ForgotPasswordForm},
        machine::FlowState,
    },
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

/// Requests reset instructions. The confirmation reads the same whether or not
/// the account exists.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let (query, ctx) = flow::page_context();
    let api = HttpApi::from_config(&AppConfig::load());
    let liveness = flow::page_liveness();
    let state = RwSignal::new(FlowState::default());
    let email = RwSignal::new(ForgotPasswordForm::from_query(&query).email);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if !flow::begin(state) {
            return;
        }

        let form = ForgotPasswordForm {
            email: email.get_untracked(),
        };
        match forgot_password::prepare(&form) {
            Ok(request) => {
                let api = api.clone();
                let liveness = liveness.clone();
                spawn_local(async move {
                    let outcome = forgot_password::submit(&api, &request).await;
                    flow::settle(state, &liveness, outcome);
                });
            }
            Err(err) => flow::reject(state, err),
        }
    };

    let busy = Signal::derive(move || state.with(FlowState::is_busy));
    let login_link = ctx.link(paths::LOGIN, &[]);

    view! {
        <AuthLayout title="Reset your password" subtitle="We will email you reset instructions.">
            <form class="space-y-4" on:submit=on_submit>
                <TextField
                    id="email"
                    label="Email"
                    value=email
                    input_type="email"
                    autocomplete="email"
                    placeholder="name@example.com"
                    required=true
                />
                <Button button_type="submit" disabled=busy>
                    {move || if busy.get() { "Sending..." } else { "Send instructions" }}
                </Button>
                {move || busy.get().then(|| view! { <Spinner /> })}
            </form>
            <FlowBanners state=state />
            <FlowLink href=login_link label="Back to sign in" />
        </AuthLayout>
    }
}
