//! Session issuance, verification and revocation.
//!
//! Flow Overview: after a successful credential check `issue` signs a token
//! for the principal and sets it as the session cookie. On later requests
//! `verify` reads the cookie and rebuilds the principal from the token claims.
//! `revoke` only clears the cookie; there is no server-side session to drop.

use axum::http::HeaderMap;
use tracing::{debug, warn};

use super::{
    cookie, error::AuthError, principal::Principal, state::AuthConfig, token::TokenCodec,
};

#[derive(Debug)]
pub struct SessionManager {
    codec: TokenCodec,
    secure_cookies: bool,
}

impl SessionManager {
    /// Build a session manager from the deployment configuration.
    ///
    /// # Errors
    /// Returns [`AuthError::Fatal`] if the signing key is empty or the TTL is
    /// not positive.
    pub fn new(config: &AuthConfig) -> Result<Self, AuthError> {
        Ok(Self {
            codec: TokenCodec::new(config.signing_key(), config.token_ttl_seconds())?,
            secure_cookies: config.secure_cookies(),
        })
    }

    #[must_use]
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        self.secure_cookies
    }

    /// Sign a token for `principal` and attach it to the response headers.
    ///
    /// # Errors
    /// Returns an error if signing fails or the token is not a valid header value.
    pub fn issue(&self, principal: &Principal, headers: &mut HeaderMap) -> Result<(), AuthError> {
        let token = self.codec.sign(principal)?;
        cookie::attach(
            headers,
            &token,
            self.codec.ttl_seconds(),
            self.secure_cookies,
        )
        .map_err(|err| AuthError::Internal(anyhow::anyhow!("invalid session cookie: {err}")))?;
        debug!("Session issued for {}", principal.id);
        Ok(())
    }

    /// Resolve the session cookie into a principal.
    ///
    /// # Errors
    /// - [`AuthError::BadRequest`] if no session cookie was presented.
    /// - [`AuthError::Unauthorized`] if the token is malformed, tampered or expired.
    pub fn verify(&self, headers: &HeaderMap) -> Result<Principal, AuthError> {
        let Some(token) = cookie::read(headers) else {
            debug!("No session cookie presented");
            return Err(AuthError::BadRequest);
        };

        match self.codec.verify(&token) {
            Ok(claims) => Ok(Principal::from(claims)),
            Err(reason) => {
                warn!("Session token rejected: {reason}");
                Err(reason.into())
            }
        }
    }

    /// Tell the client to drop the session cookie. Safe to call without a session.
    pub fn revoke(&self, headers: &mut HeaderMap) {
        cookie::clear(headers, self.secure_cookies);
    }
}
