//! Map validated command-line arguments to the action to run.

use crate::cli::actions::{hash_password, server::Args, Action};
use crate::cli::commands::{auth, hash};
use anyhow::{Context, Result};
use url::Url;

/// Map validated CLI matches to the server or hash-password action.
///
/// # Errors
/// Returns an error if required arguments are missing or malformed.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    if let Some(sub) = matches.subcommand_matches(hash::CMD_HASH_PASSWORD) {
        let opts = hash::Options::parse(sub);
        return Ok(Action::HashPassword(hash_password::Args {
            memory_kib: opts.memory_kib,
            iterations: opts.iterations,
            parallelism: opts.parallelism,
        }));
    }

    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);
    let dsn = matches
        .get_one::<String>("dsn")
        .cloned()
        .context("missing required argument: --dsn")?;

    Url::parse(&dsn).context("invalid LEARNBOARD_DSN")?;

    let auth_opts = auth::Options::parse(matches)?;

    Ok(Action::Server(Args {
        port,
        dsn,
        jwt_secret: auth_opts.jwt_secret,
        secure_cookies: auth_opts.secure_cookies,
        session_ttl_seconds: auth_opts.session_ttl_seconds,
    }))
}
