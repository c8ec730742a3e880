use crate::auth::SecretHasher;
use anyhow::{anyhow, Context, Result};
use secrecy::{ExposeSecret, SecretString};
use std::io::{self, BufRead, Write};

#[derive(Debug)]
pub struct Args {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

/// Execute the hash-password action.
/// # Errors
/// Returns an error if the parameters are invalid, stdin holds no password,
/// or hashing fails.
pub async fn execute(args: Args) -> Result<()> {
    let hash = tokio::task::spawn_blocking(move || {
        let hasher = SecretHasher::new(args.memory_kib, args.iterations, args.parallelism)
            .context("Invalid password hashing parameters")?;
        hash_from_reader(io::stdin().lock(), &hasher)
    })
    .await
    .context("password hashing task failed")??;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{hash}")?;

    Ok(())
}

// First line of input, minus the line terminator, hashed as-is.
fn hash_from_reader(mut reader: impl BufRead, hasher: &SecretHasher) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    let password = SecretString::from(line.trim_end_matches(['\r', '\n']));

    if password.expose_secret().is_empty() {
        return Err(anyhow!("no password given on stdin"));
    }

    hasher.hash(password.expose_secret())
}
