use super::{
    flow::{self, FlowBanners, FlowLink},
    paths,
};
use crate::{
    app_lib::{config::AppConfig, http::HttpApi},
    components::{AuthLayout, Button, Spinner, TextField},
    features::auth::{
        flows::otp_request::{self, OtpRequestForm},
        machine::FlowState,
        types::OtpChannel,
    },
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

#[component]
pub fn OtpRequestPage() -> impl IntoView {
    let (query, ctx) = flow::page_context();
    let api = HttpApi::from_config(&AppConfig::load());
    let liveness = flow::page_liveness();
    let state = RwSignal::new(FlowState::default());
    let initial = OtpRequestForm::from_query(&query);
    let identifier = RwSignal::new(initial.identifier);
    let channel = RwSignal::new(initial.channel);

    let on_submit = {
        let ctx = ctx.clone();
        move |event: SubmitEvent| {
            event.prevent_default();
            if !flow::begin(state) {
                return;
            }

            let form = OtpRequestForm {
                identifier: identifier.get_untracked(),
                channel: channel.get_untracked(),
            };
            match otp_request::prepare(&ctx, &form) {
                Ok(request) => {
                    let api = api.clone();
                    let liveness = liveness.clone();
                    spawn_local(async move {
                        let outcome = otp_request::submit(&api, &request).await;
                        flow::settle(state, &liveness, outcome);
                    });
                }
                Err(err) => flow::reject(state, err),
            }
        }
    };

    let busy = Signal::derive(move || state.with(FlowState::is_busy));
    let verify_link = {
        let ctx = ctx.clone();
        move || otp_request::verify_link(&ctx, &identifier.get())
    };
    let login_link = ctx.link(paths::LOGIN, &[]);

    view! {
        <AuthLayout title="Request a one-time code">
            <form class="space-y-4" on:submit=on_submit>
                <TextField
                    id="phone"
                    label="Phone or email"
                    value=identifier
                    autocomplete="tel"
                    required=true
                />
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="channel"
                    >
                        "Channel"
                    </label>
                    <select
                        id="channel"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        prop:value=move || channel.get().as_str()
                        on:change=move |event| {
                            channel.set(OtpChannel::from_value(&event_target_value(&event)))
                        }
                    >
                        {OtpChannel::ALL
                            .into_iter()
                            .map(|option| {
                                view! { <option value=option.as_str()>{option.label()}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>
                <Button button_type="submit" disabled=busy>
                    {move || if busy.get() { "Sending code..." } else { "Send code" }}
                </Button>
                {move || busy.get().then(|| view! { <Spinner /> })}
            </form>
            <FlowBanners state=state />
            <div class="flex justify-between text-sm">
                <a
                    class="font-medium text-blue-600 hover:underline dark:text-blue-500"
                    href=verify_link
                >
                    "I have a code"
                </a>
                <FlowLink href=login_link label="Back to sign in" />
            </div>
        </AuthLayout>
    }
}
