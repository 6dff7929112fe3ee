pub mod logging;
pub mod portal;
pub mod ui;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const ARG_PORT: &str = "port";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("authportal")
        .about("Sign-in front end for the OAuth authorize flow")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long(ARG_PORT)
                .help("Port to listen on")
                .default_value("8080")
                .env("AUTHPORTAL_PORT")
                .value_parser(clap::value_parser!(u16)),
        );

    let command = portal::with_args(command);
    let command = ui::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_VARS: [&str; 8] = [
        "AUTHPORTAL_PORT",
        "AUTHPORTAL_ASSETS_DIR",
        "AUTHPORTAL_BACKEND_URL",
        "AUTHPORTAL_API_BASE_URL",
        "AUTHPORTAL_UI_LOG_LEVEL",
        "AUTHPORTAL_LOG_LEVEL",
        "AUTHPORTAL_LOG_JSON",
        "RUST_LOG",
    ];

    fn cleared() -> Vec<(&'static str, Option<&'static str>)> {
        ENV_VARS.iter().map(|name| (*name, None)).collect()
    }

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "authportal");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Sign-in front end for the OAuth authorize flow".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(cleared(), || {
            let matches = new().get_matches_from(vec!["authportal"]);
            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(8080));
            assert_eq!(
                matches.get_one::<String>(portal::ARG_ASSETS_DIR).cloned(),
                Some("apps/web/dist".to_string())
            );
            assert!(matches.get_one::<url::Url>(portal::ARG_BACKEND_URL).is_none());
            assert!(matches.get_one::<String>(ui::ARG_API_BASE_URL).is_none());
            assert!(!matches.get_flag(logging::ARG_LOG_JSON));
        });
    }

    #[test]
    fn test_check_args() {
        temp_env::with_vars(cleared(), || {
            let matches = new().get_matches_from(vec![
                "authportal",
                "--port",
                "9090",
                "--assets-dir",
                "/srv/authportal",
                "--backend-url",
                "https://auth.example.com",
                "--api-base-url",
                "https://api.example.com",
                "--ui-log-level",
                "debug",
                "--log-json",
            ]);

            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(9090));
            assert_eq!(
                matches.get_one::<String>(portal::ARG_ASSETS_DIR).cloned(),
                Some("/srv/authportal".to_string())
            );
            assert_eq!(
                matches
                    .get_one::<url::Url>(portal::ARG_BACKEND_URL)
                    .map(url::Url::as_str),
                Some("https://auth.example.com/")
            );
            assert_eq!(
                matches.get_one::<String>(ui::ARG_API_BASE_URL).cloned(),
                Some("https://api.example.com".to_string())
            );
            assert_eq!(
                matches.get_one::<String>(ui::ARG_UI_LOG_LEVEL).cloned(),
                Some("debug".to_string())
            );
            assert!(matches.get_flag(logging::ARG_LOG_JSON));
        });
    }

    #[test]
    fn test_check_env() {
        let mut vars = cleared();
        vars.retain(|(name, _)| {
            !matches!(
                *name,
                "AUTHPORTAL_PORT" | "AUTHPORTAL_BACKEND_URL" | "AUTHPORTAL_LOG_LEVEL"
            )
        });
        vars.push(("AUTHPORTAL_PORT", Some("443")));
        vars.push(("AUTHPORTAL_BACKEND_URL", Some("http://127.0.0.1:8000")));
        vars.push(("AUTHPORTAL_LOG_LEVEL", Some("info")));

        temp_env::with_vars(vars, || {
            let matches = new().get_matches_from(vec!["authportal"]);
            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(443));
            assert_eq!(
                matches
                    .get_one::<url::Url>(portal::ARG_BACKEND_URL)
                    .map(url::Url::as_str),
                Some("http://127.0.0.1:8000/")
            );
            assert_eq!(
                matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                Some(2)
            );
        });
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            let mut vars = cleared();
            vars.retain(|(name, _)| *name != "AUTHPORTAL_LOG_LEVEL");
            vars.push(("AUTHPORTAL_LOG_LEVEL", Some(level)));

            temp_env::with_vars(vars, || {
                let matches = new().get_matches_from(vec!["authportal"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5_usize {
            temp_env::with_vars(cleared(), || {
                let mut args = vec!["authportal".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_rejects_unknown_ui_log_level() {
        temp_env::with_vars(cleared(), || {
            let result =
                new().try_get_matches_from(vec!["authportal", "--ui-log-level", "verbose"]);
            assert!(result.is_err());
        });
    }
}
