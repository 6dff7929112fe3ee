//! Values published to the browser through `/config.js`. They are public; never
//! route secrets through these flags.

use clap::{Arg, ArgMatches, Command};

pub const ARG_API_BASE_URL: &str = "api-base-url";
pub const ARG_UI_LOG_LEVEL: &str = "ui-log-level";

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub api_base_url: Option<String>,
    pub log_level: Option<String>,
}

impl Options {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        let read_optional = |id: &str| -> Option<String> {
            matches
                .get_one::<String>(id)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            api_base_url: read_optional(ARG_API_BASE_URL),
            log_level: read_optional(ARG_UI_LOG_LEVEL),
        }
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_BASE_URL)
                .long(ARG_API_BASE_URL)
                .help("Auth API base URL used by the browser (default: same origin)")
                .env("AUTHPORTAL_API_BASE_URL"),
        )
        .arg(
            Arg::new(ARG_UI_LOG_LEVEL)
                .long(ARG_UI_LOG_LEVEL)
                .help("Browser console log level: error, warn, info, debug, trace")
                .env("AUTHPORTAL_UI_LOG_LEVEL")
                .value_parser(["error", "warn", "info", "debug", "trace"]),
        )
}
