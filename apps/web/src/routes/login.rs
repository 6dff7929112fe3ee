use super::{
    flow::{self, FlowBanners, FlowLink},
    paths,
};
use crate::{
    app_lib::{browser, config::AppConfig, http::HttpApi},
    components::{AuthLayout, Button, ButtonVariant, Spinner, TextField},
    features::auth::{
        flows::login::{self, LoginForm},
        machine::FlowState,
        password::{MIN_PASSWORD_LENGTH, PASSWORD_INPUT_PATTERN, password_requirements},
        types::OAuthProvider,
    },
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use tracing::debug;

/// Password sign-in plus one button per OAuth provider. Providers load in the
/// background and never block the form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, ctx) = flow::page_context();
    let api = HttpApi::from_config(&AppConfig::load());
    let liveness = flow::page_liveness();
    let state = RwSignal::new(FlowState::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let providers = RwSignal::new(Vec::<OAuthProvider>::new());

    {
        let api = api.clone();
        let liveness = liveness.clone();
        spawn_local(async move {
            let found = login::discover_providers(&api).await;
            if liveness.is_alive() {
                providers.set(found);
            } else {
                debug!("login page disposed before providers loaded");
            }
        });
    }

    let start_provider = {
        let api = api.clone();
        let ctx = ctx.clone();
        let liveness = liveness.clone();
        Callback::new(move |provider: OAuthProvider| {
            if !flow::begin(state) {
                return;
            }
            let api = api.clone();
            let ctx = ctx.clone();
            let liveness = liveness.clone();
            spawn_local(async move {
                let origin = browser::current_origin();
                let outcome = login::select_provider(&api, &origin, &ctx, &provider).await;
                flow::settle(state, &liveness, outcome);
            });
        })
    };

    let on_submit = {
        let ctx = ctx.clone();
        move |event: SubmitEvent| {
            event.prevent_default();
            if !flow::begin(state) {
                return;
            }

            let form = LoginForm {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            match login::prepare(&ctx, &form) {
                Ok(request) => {
                    let api = api.clone();
                    let ctx = ctx.clone();
                    let liveness = liveness.clone();
                    spawn_local(async move {
                        let outcome = login::submit(&api, &ctx, &request).await;
                        flow::settle(state, &liveness, outcome);
                    });
                }
                Err(err) => flow::reject(state, err),
            }
        }
    };

    let busy = Signal::derive(move || state.with(FlowState::is_busy));
    let forgot_link = ctx.link(paths::FORGOT_PASSWORD, &[]);
    let otp_link = ctx.link(paths::OTP_REQUEST, &[]);
    let register_link = ctx.link(paths::REGISTER, &[]);

    view! {
        <AuthLayout title="Sign in" subtitle="Use your email and password or a provider.">
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
                <TextField
                    id="password"
                    label="Password"
                    value=password
                    input_type="password"
                    autocomplete="current-password"
                    required=true
                    pattern=PASSWORD_INPUT_PATTERN
                    minlength=MIN_PASSWORD_LENGTH
                    title=password_requirements()
                />
                <Button button_type="submit" disabled=busy>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </Button>
                {move || busy.get().then(|| view! { <Spinner /> })}
            </form>
            <FlowBanners state=state />
            {move || {
                let list = providers.get();
                (!list.is_empty())
                    .then(|| {
                        view! {
                            <div class="space-y-2">
                                <p class="text-center text-sm text-gray-500 dark:text-gray-400">
                                    "or continue with"
                                </p>
                                {list
                                    .into_iter()
                                    .map(|provider| {
                                        let label = provider.label();
                                        let icon = provider.icon().map(str::to_string);
                                        view! {
                                            <Button
                                                variant=ButtonVariant::Secondary
                                                disabled=busy
                                                on_click=Callback::new(move |()| {
                                                    start_provider.run(provider.clone())
                                                })
                                            >
                                                {icon
                                                    .map(|src| {
                                                        view! { <img class="h-4 w-4" src=src alt="" /> }
                                                    })}
                                                {label}
                                            </Button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
            <div class="flex flex-wrap justify-between gap-2 text-sm">
                <FlowLink href=forgot_link label="Forgot password?" />
                <FlowLink href=otp_link label="Sign in with a one-time code" />
                <FlowLink href=register_link label="Create an account" />
            </div>
        </AuthLayout>
    }
}
