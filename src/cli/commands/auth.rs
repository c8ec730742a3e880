use anyhow::{anyhow, Result};
use clap::{Arg, ArgMatches, Command};
use secrecy::{ExposeSecret, SecretString};

pub const ARG_JWT_SECRET: &str = "jwt-secret";
pub const ARG_SECURE_COOKIES: &str = "secure-cookies";
pub const ARG_SESSION_TTL_SECONDS: &str = "session-ttl-seconds";

#[derive(Debug, Clone)]
pub struct Options {
    pub jwt_secret: SecretString,
    pub secure_cookies: bool,
    pub session_ttl_seconds: i64,
}

impl Options {
    /// Parse session arguments from matches.
    ///
    /// # Errors
    /// Returns an error if the signing secret is missing or blank.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let jwt_secret = matches
            .get_one::<String>(ARG_JWT_SECRET)
            .map(|secret| SecretString::from(secret.as_str()))
            .filter(|secret| !secret.expose_secret().trim().is_empty())
            .ok_or_else(|| anyhow!("missing required argument: --{ARG_JWT_SECRET}"))?;

        Ok(Self {
            jwt_secret,
            secure_cookies: matches
                .get_one::<bool>(ARG_SECURE_COOKIES)
                .copied()
                .unwrap_or(false),
            session_ttl_seconds: matches
                .get_one::<i64>(ARG_SESSION_TTL_SECONDS)
                .copied()
                .unwrap_or(3600),
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_JWT_SECRET)
                .long(ARG_JWT_SECRET)
                .help("Secret used to sign session tokens")
                .env("LEARNBOARD_JWT_SECRET")
                .hide_env_values(true)
                .required(true),
        )
        .arg(
            Arg::new(ARG_SECURE_COOKIES)
                .long(ARG_SECURE_COOKIES)
                .help("Only send the session cookie over HTTPS")
                .env("LEARNBOARD_SECURE_COOKIES")
                .num_args(0..=1)
                .default_value("false")
                .default_missing_value("true")
                .value_parser(clap::value_parser!(bool)),
        )
        .arg(
            Arg::new(ARG_SESSION_TTL_SECONDS)
                .long(ARG_SESSION_TTL_SECONDS)
                .help("Session token lifetime in seconds")
                .env("LEARNBOARD_SESSION_TTL_SECONDS")
                .default_value("3600")
                .value_parser(clap::value_parser!(i64).range(1..)),
        )
}

