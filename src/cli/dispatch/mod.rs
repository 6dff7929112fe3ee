//! Command-line argument dispatch.
//!
//! Maps validated CLI matches to the action to run, currently only the portal
//! server with its asset, backend and browser-facing configuration.

use crate::cli::actions::{Action, server::Args};
use crate::cli::commands::{ARG_PORT, portal, ui};
use anyhow::Result;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080);

    let portal_opts = portal::Options::parse(matches)?;
    let ui_opts = ui::Options::parse(matches);

    Ok(Action::Server(Args {
        port,
        assets_dir: portal_opts.assets_dir,
        backend_url: portal_opts.backend_url,
        api_base_url: ui_opts.api_base_url,
        ui_log_level: ui_opts.log_level,
    }))
}
