//! Signed, self-expiring session tokens.
//!
//! Tokens are compact HS256 JWTs carrying `{id, name, iat, exp}`. They are
//! self-contained: nothing is stored server-side, so a token stays valid until
//! `exp` even after the cookie is cleared.

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::{error::AuthError, principal::Principal, utils::now_unix_seconds};

pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 60 * 60;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    pub id: Uuid,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

/// Reason a presented token was rejected.
///
/// Only for server-side logs; callers collapse every variant into
/// [`AuthError::Unauthorized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidToken {
    #[error("malformed token")]
    Malformed,
    #[error("signature mismatch")]
    Signature,
    #[error("token expired")]
    Expired,
}

impl From<InvalidToken> for AuthError {
    fn from(_: InvalidToken) -> Self {
        AuthError::Unauthorized
    }
}

pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_seconds: i64,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("key", &"***")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl TokenCodec {
    /// Build a codec around the process-wide signing key.
    ///
    /// # Errors
    /// Returns [`AuthError::Fatal`] if the key is empty or the TTL is not positive.
    pub fn new(key: &SecretString, ttl_seconds: i64) -> Result<Self, AuthError> {
        let secret = key.expose_secret();
        if secret.is_empty() {
            return Err(AuthError::Fatal("token signing key is empty".to_string()));
        }
        if ttl_seconds <= 0 {
            return Err(AuthError::Fatal(format!(
                "token ttl must be positive, got {ttl_seconds}"
            )));
        }

        // Expiry is checked by hand against the caller's clock, with no leeway.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_seconds,
        })
    }

    #[must_use]
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// Sign claims for `principal`, issued now.
    ///
    /// # Errors
    /// Returns an error if JWT encoding fails.
    pub fn sign(&self, principal: &Principal) -> Result<String, AuthError> {
        self.sign_at(principal, now_unix_seconds())
    }

    /// Sign claims for `principal` as if issued at `issued_at` (unix seconds).
    ///
    /// # Errors
    /// Returns an error if JWT encoding fails.
    pub fn sign_at(&self, principal: &Principal, issued_at: i64) -> Result<String, AuthError> {
        let claims = TokenClaims {
            id: principal.id,
            name: principal.name.clone(),
            iat: issued_at,
            exp: issued_at.saturating_add(self.ttl_seconds),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| AuthError::Internal(anyhow::anyhow!("failed to sign token: {err}")))
    }

    /// Verify a token against the current clock.
    ///
    /// # Errors
    /// Returns [`InvalidToken`] if the token is malformed, tampered or expired.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, InvalidToken> {
        self.verify_at(token, now_unix_seconds())
    }

    /// Verify a token as of `now` (unix seconds). The signature is checked
    /// before expiry.
    ///
    /// # Errors
    /// Returns [`InvalidToken`] if the token is malformed, tampered or expired.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<TokenClaims, InvalidToken> {
        let data = decode::<TokenClaims>(token, &self.decoding, &self.validation).map_err(
            |err| match err.kind() {
                ErrorKind::InvalidSignature => InvalidToken::Signature,
                ErrorKind::ExpiredSignature => InvalidToken::Expired,
                _ => InvalidToken::Malformed,
            },
        )?;

        if data.claims.exp <= now {
            return Err(InvalidToken::Expired);
        }

        Ok(data.claims)
    }
}
