//! # Learnboard (credential verification and session cookies)
//!
//! `learnboard` checks an email and password against stored Argon2id hashes
//! and, on success, issues a signed HS256 token inside the `tkn` cookie.
//!
//! ## Authentication
//!
//! `POST /users/login` looks the account up by its trimmed email and compares
//! the password against the stored hash. Unknown accounts answer `404`, wrong
//! passwords `401`, and bodies whose `email` or `password` is not a string `400`.
//!
//! ## Sessions
//!
//! Sessions are stateless. The token carries the account id and display name,
//! expires one hour after issuance by default, and is only ever sent back as an
//! `HttpOnly` cookie. `GET /users/login` verifies the cookie and returns the
//! display name; `POST /users/logout` clears it.

pub mod auth;
pub mod cli;
pub mod learnboard;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }
}
