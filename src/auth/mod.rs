//! Credential verification and cookie-carried session tokens.
//!
//! Components, leaf first:
//!
//! - [`hasher`]: Argon2id hashing and constant-time comparison of secrets.
//! - [`token`]: HS256 tokens carrying `{id, name, iat, exp}`.
//! - [`cookie`]: the `tkn` session cookie (set, read, clear).
//! - [`authenticator`]: credential lookup plus secret comparison.
//! - [`session`]: token issuance, verification and revocation.
//!
//! ## Revocation
//!
//! Tokens are self-contained and no session table exists. Logging out clears
//! the cookie, but a copied token stays valid until it expires (one hour by
//! default). Immediate revocation would need a denylist keyed by token.

pub mod authenticator;
pub mod cookie;
mod error;
pub mod hasher;
mod principal;
pub mod session;
mod state;
pub mod store;
pub mod token;
pub mod types;
mod utils;

pub use authenticator::Authenticator;
pub use error::AuthError;
pub use hasher::SecretHasher;
pub use principal::Principal;
pub use session::SessionManager;
pub use state::{AuthConfig, AuthState};
pub use store::{CredentialRecord, CredentialStore, MemoryCredentialStore, PgCredentialStore};
pub use token::{InvalidToken, TokenClaims, TokenCodec};
