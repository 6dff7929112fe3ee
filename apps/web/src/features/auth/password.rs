//! Password policy shared by login and registration: at least eight
//! characters, one ASCII uppercase letter and one character outside
//! `[A-Za-z0-9]`.

use std::fmt;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// HTML `pattern` attribute enforcing the same policy in the browser.
pub const PASSWORD_INPUT_PATTERN: &str = "^(?=.*[A-Z])(?=.*[^A-Za-z0-9]).{8,}$";

const POLICY_MESSAGE: &str = "Password must be at least 8 characters and include 1 uppercase letter and 1 special character.";
const REQUIREMENTS: &str = "At least 8 characters, 1 uppercase letter, and 1 special character.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordPolicyError;

impl fmt::Display for PasswordPolicyError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(POLICY_MESSAGE)
    }
}

impl std::error::Error for PasswordPolicyError {}

/// Short requirement text for helper copy and input titles.
pub fn password_requirements() -> &'static str {
    REQUIREMENTS
}

/// Checks `value` against the policy.
///
/// # Errors
/// Returns [`PasswordPolicyError`] when any rule fails.
pub fn validate_password(value: &str) -> Result<(), PasswordPolicyError> {
    // Line terminators never match `.` in the input pattern.
    let single_line = !value
        .chars()
        .any(|c| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'));
    let long_enough = value.chars().count() >= MIN_PASSWORD_LENGTH;
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_special = value.chars().any(|c| !c.is_ascii_alphanumeric());

    if single_line && long_enough && has_upper && has_special {
        Ok(())
    } else {
        Err(PasswordPolicyError)
    }
}
