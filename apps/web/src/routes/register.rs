use super::{
    flow::{self, FlowBanners, FlowLink},
    paths,
};
use crate::{
    app_lib::{config::AppConfig, http::HttpApi},
    components::{AuthLayout, Button, Spinner, TextField},
    features::auth::{
        flows::register::{self, RegisterForm},
        machine::FlowState,
        password::{MIN_PASSWORD_LENGTH, PASSWORD_INPUT_PATTERN, password_requirements},
    },
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (_, ctx) = flow::page_context();
    let api = HttpApi::from_config(&AppConfig::load());
    let liveness = flow::page_liveness();
    let state = RwSignal::new(FlowState::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let client_id = RwSignal::new(String::new());
    let show_client_id = register::shows_client_id_input(&ctx);

    let on_submit = {
        let ctx = ctx.clone();
        move |event: SubmitEvent| {
            event.prevent_default();
            if !flow::begin(state) {
                return;
            }

            let form = RegisterForm {
                email: email.get_untracked(),
                password: password.get_untracked(),
                name: name.get_untracked(),
                client_id: client_id.get_untracked(),
            };
            match register::prepare(&ctx, &form) {
                Ok(request) => {
                    let api = api.clone();
                    let ctx = ctx.clone();
                    let liveness = liveness.clone();
                    spawn_local(async move {
                        let outcome = register::submit(&api, &ctx, &request).await;
                        flow::settle(state, &liveness, outcome);
                    });
                }
                Err(err) => flow::reject(state, err),
            }
        }
    };

    let busy = Signal::derive(move || state.with(FlowState::is_busy));
    let login_link = ctx.link(paths::LOGIN, &[]);

    view! {
        <AuthLayout title="Create an account">
            <form class="space-y-4" on:submit=on_submit>
                <TextField id="name" label="Name (optional)" value=name autocomplete="name" />
                <TextField
                    id="email"
                    label="Email"
                    value=email
                    input_type="email"
                    autocomplete="email"
                    placeholder="name@example.com"
                    required=true
                />
                <TextField
                    id="password"
                    label="Password"
                    value=password
                    input_type="password"
                    autocomplete="new-password"
                    required=true
                    pattern=PASSWORD_INPUT_PATTERN
                    minlength=MIN_PASSWORD_LENGTH
                    title=password_requirements()
                />
                <p class="text-xs text-gray-500 dark:text-gray-400">{password_requirements()}</p>
                {show_client_id
                    .then(|| {
                        view! { <TextField id="client_id" label="Client ID" value=client_id /> }
                    })}
                <Button button_type="submit" disabled=busy>
                    {move || if busy.get() { "Creating account..." } else { "Create account" }}
                </Button>
                {move || busy.get().then(|| view! { <Spinner /> })}
            </form>
            <FlowBanners state=state />
            <p class="text-sm text-gray-500 dark:text-gray-400">
                "Already have an account? " <FlowLink href=login_link label="Sign in" />
            </p>
        </AuthLayout>
    }
}
