//! Path dispatch. [`Route::resolve`] is an exact match on the current path; the
//! page views are `wasm32` only.

pub mod paths;

#[cfg(target_arch = "wasm32")]
mod error;
#[cfg(target_arch = "wasm32")]
mod flow;
#[cfg(target_arch = "wasm32")]
mod forgot_password;
#[cfg(target_arch = "wasm32")]
mod login;
#[cfg(target_arch = "wasm32")]
mod not_found;
#[cfg(target_arch = "wasm32")]
mod otp_request;
#[cfg(target_arch = "wasm32")]
mod otp_verify;
#[cfg(target_arch = "wasm32")]
mod register;

#[cfg(target_arch = "wasm32")]
pub(crate) use view::AppRoutes;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    ForgotPassword,
    OtpRequest,
    OtpVerify,
    Error,
    NotFound,
}

impl Route {
    pub fn resolve(path: &str) -> Self {
        match path {
            paths::ROOT | paths::LOGIN => Route::Login,
            paths::REGISTER => Route::Register,
            paths::FORGOT_PASSWORD => Route::ForgotPassword,
            paths::OTP_REQUEST => Route::OtpRequest,
            paths::OTP_VERIFY => Route::OtpVerify,
            paths::ERROR => Route::Error,
            _ => Route::NotFound,
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod view {
    use super::{
        Route, error::ErrorPage, forgot_password::ForgotPasswordPage, login::LoginPage,
        not_found::NotFoundPage, otp_request::OtpRequestPage, otp_verify::OtpVerifyPage,
        register::RegisterPage,
    };
    use crate::app_lib::browser;
    use leptos::prelude::*;

    /// Renders the page for the current path. Every navigation is a full page
    /// load, so the path is read once.
    #[component]
    pub fn AppRoutes() -> impl IntoView {
        let path = browser::current_path();
        let route = Route::resolve(&path);
        tracing::debug!(path = %path, ?route, "resolved route");

        match route {
            Route::Login => view! { <LoginPage /> }.into_any(),
            Route::Register => view! { <RegisterPage /> }.into_any(),
            Route::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
            Route::OtpRequest => view! { <OtpRequestPage /> }.into_any(),
            Route::OtpVerify => view! { <OtpVerifyPage /> }.into_any(),
            Route::Error => view! { <ErrorPage /> }.into_any(),
            Route::NotFound => view! { <NotFoundPage /> }.into_any(),
        }
    }
}
