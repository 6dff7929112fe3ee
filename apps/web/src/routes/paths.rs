//! Paths served by the sign-in bundle.

pub const ROOT: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const FORGOT_PASSWORD: &str = "/forgot-password";
pub const OTP_REQUEST: &str = "/otp/request";
pub const OTP_VERIFY: &str = "/otp/verify";
pub const ERROR: &str = "/error";
