//! Shared UI components for the flow pages.

pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use layout::AuthLayout;
pub(crate) use ui::{Alert, AlertKind, Button, ButtonVariant, Spinner, TextField};
