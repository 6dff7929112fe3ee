use anyhow::Result;
use clap::{Arg, ArgMatches, Command, builder::ValueParser};
use std::path::PathBuf;
use url::Url;

pub const ARG_ASSETS_DIR: &str = "assets-dir";
pub const ARG_BACKEND_URL: &str = "backend-url";

#[derive(Debug, Clone)]
pub struct Options {
    pub assets_dir: PathBuf,
    pub backend_url: Option<Url>,
}

impl Options {
    /// Parse asset and backend arguments from matches.
    ///
    /// # Errors
    /// Returns an error if the assets directory is missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let assets_dir = matches
            .get_one::<String>(ARG_ASSETS_DIR)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --{ARG_ASSETS_DIR}"))?;

        Ok(Self {
            assets_dir,
            backend_url: matches.get_one::<Url>(ARG_BACKEND_URL).cloned(),
        })
    }
}

/// Accepts absolute `http`/`https` URLs only.
#[must_use]
pub fn validator_http_url() -> ValueParser {
    ValueParser::from(move |value: &str| -> std::result::Result<Url, String> {
        let url = Url::parse(value.trim()).map_err(|err| format!("invalid URL: {err}"))?;
        match url.scheme() {
            "http" | "https" if url.host_str().is_some() => Ok(url),
            _ => Err("URL must use http or https and include a host".to_string()),
        }
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_ASSETS_DIR)
                .long(ARG_ASSETS_DIR)
                .help("Directory with the built web bundle (index.html, wasm, css)")
                .default_value("apps/web/dist")
                .env("AUTHPORTAL_ASSETS_DIR"),
        )
        .arg(
            Arg::new(ARG_BACKEND_URL)
                .long(ARG_BACKEND_URL)
                .help("Auth backend to proxy /auth/* requests to, example: http://127.0.0.1:8000")
                .long_help(
                    "Auth backend to proxy /auth/* requests to. When unset, /auth/* answers 503 and the UI must be configured with --api-base-url instead.",
                )
                .env("AUTHPORTAL_BACKEND_URL")
                .value_parser(validator_http_url()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_http_url_rejects_other_schemes() {
        let command = with_args(Command::new("authportal"));
        let result = command.try_get_matches_from(vec![
            "authportal",
            "--backend-url",
            "ftp://auth.example.com",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn validator_http_url_accepts_http() {
        let command = with_args(Command::new("authportal"));
        let matches = command
            .try_get_matches_from(vec![
                "authportal",
                "--backend-url",
                "http://127.0.0.1:8000",
            ])
            .expect("valid backend URL");
        let options = Options::parse(&matches).expect("options");
        assert_eq!(
            options.backend_url.map(|url| url.to_string()),
            Some("http://127.0.0.1:8000/".to_string())
        );
        assert_eq!(options.assets_dir, PathBuf::from("apps/web/dist"));
    }
}
