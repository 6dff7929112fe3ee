use super::{
    flow::{self, FlowBanners, FlowLink},
    paths,
};
use crate::{
    app_lib::{config::AppConfig, http::HttpApi},
    components::{AuthLayout, Button, Spinner, TextField},
    features::auth::{
        flows::otp_verify::{self, OtpVerifyForm},
        machine::FlowState,
    },
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

#[component]
pub fn OtpVerifyPage() -> impl IntoView {
    let (query, ctx) = flow::page_context();
    let api = HttpApi::from_config(&AppConfig::load());
    let liveness = flow::page_liveness();
    let state = RwSignal::new(FlowState::default());
    let identifier = RwSignal::new(OtpVerifyForm::from_query(&query).identifier);
    let code = RwSignal::new(String::new());
    let client_id = RwSignal::new(String::new());
    let show_client_id = otp_verify::shows_client_id_input(&ctx);

    let on_submit = {
        let ctx = ctx.clone();
        move |event: SubmitEvent| {
            event.prevent_default();
            if !flow::begin(state) {
                return;
            }

            let form = OtpVerifyForm {
                identifier: identifier.get_untracked(),
                code: code.get_untracked(),
                client_id: client_id.get_untracked(),
            };
            match otp_verify::prepare(&ctx, &form) {
                Ok(request) => {
                    let api = api.clone();
                    let ctx = ctx.clone();
                    let liveness = liveness.clone();
                    spawn_local(async move {
                        let outcome = otp_verify::submit(&api, &ctx, &request).await;
                        flow::settle(state, &liveness, outcome);
                    });
                }
                Err(err) => flow::reject(state, err),
            }
        }
    };

    let busy = Signal::derive(move || state.with(FlowState::is_busy));
    let request_link = {
        let ctx = ctx.clone();
        move || otp_verify::request_link(&ctx, &identifier.get())
    };
    let login_link = ctx.link(paths::LOGIN, &[]);

    view! {
        <AuthLayout title="Enter your code">
            <form class="space-y-4" on:submit=on_submit>
                <TextField
                    id="phone"
                    label="Phone or email"
                    value=identifier
                    autocomplete="tel"
                    required=true
                />
                <TextField
                    id="code"
                    label="Code"
                    value=code
                    autocomplete="one-time-code"
                    required=true
                />
                {show_client_id
                    .then(|| {
                        view! {
                            <TextField id="client_id" label="Client ID" value=client_id required=true />
                        }
                    })}
                <Button button_type="submit" disabled=busy>
                    {move || if busy.get() { "Verifying..." } else { "Verify" }}
                </Button>
                {move || busy.get().then(|| view! { <Spinner /> })}
            </form>
            <FlowBanners state=state />
            <div class="flex justify-between text-sm">
                <a
                    class="font-medium text-blue-600 hover:underline dark:text-blue-500"
                    href=request_link
                >
                    "Send a new code"
                </a>
                <FlowLink href=login_link label="Back to sign in" />
            </div>
        </AuthLayout>
    }
}
