//! Auth configuration and the shared state handed to handlers.

use secrecy::SecretString;
use std::sync::Arc;

use super::{
    authenticator::Authenticator, error::AuthError, hasher::SecretHasher, session::SessionManager,
    store::CredentialStore, token::DEFAULT_TOKEN_TTL_SECONDS,
};

#[derive(Clone, Debug)]
pub struct AuthConfig {
    signing_key: SecretString,
    token_ttl_seconds: i64,
    secure_cookies: bool,
}

impl AuthConfig {
    #[must_use]
    pub fn new(signing_key: SecretString) -> Self {
        Self {
            signing_key,
            token_ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
            secure_cookies: false,
        }
    }

    #[must_use]
    pub fn with_token_ttl_seconds(mut self, seconds: i64) -> Self {
        self.token_ttl_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = secure;
        self
    }

    pub(crate) fn signing_key(&self) -> &SecretString {
        &self.signing_key
    }

    #[must_use]
    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_ttl_seconds
    }

    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        self.secure_cookies
    }
}

/// Read-only auth components shared by every request.
#[derive(Debug)]
pub struct AuthState {
    authenticator: Authenticator,
    sessions: SessionManager,
}

impl AuthState {
    /// Wire the authenticator and session manager.
    ///
    /// # Errors
    /// Returns [`AuthError::Fatal`] if the signing configuration is unusable.
    pub fn new(
        config: &AuthConfig,
        store: Arc<dyn CredentialStore>,
        hasher: SecretHasher,
    ) -> Result<Self, AuthError> {
        Ok(Self {
            authenticator: Authenticator::new(store, hasher),
            sessions: SessionManager::new(config)?,
        })
    }

    #[must_use]
    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    #[must_use]
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }
}
