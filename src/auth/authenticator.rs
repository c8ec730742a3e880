//! First-factor credential check.
//!
//! Flow: validate the submitted shape, trim the identifier, look up the
//! record (with its secret hash), then compare the secret on the blocking
//! pool. Unknown identifiers and wrong secrets fail with different kinds; the
//! distinction reveals account existence and is kept on purpose for now.

use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{
    error::AuthError, hasher::SecretHasher, principal::Principal, store::CredentialStore,
    types::LoginRequest, utils::normalize_identifier,
};

pub struct Authenticator {
    store: Arc<dyn CredentialStore>,
    hasher: SecretHasher,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("hasher", &self.hasher)
            .finish_non_exhaustive()
    }
}

impl Authenticator {
    #[must_use]
    pub fn new(store: Arc<dyn CredentialStore>, hasher: SecretHasher) -> Self {
        Self { store, hasher }
    }

    /// Authenticate a raw login body.
    ///
    /// # Errors
    /// - [`AuthError::BadRequest`] if either field is missing or not a string;
    ///   the store is not consulted.
    /// - [`AuthError::NotFound`] if no record matches the identifier.
    /// - [`AuthError::Unauthorized`] if the secret does not match.
    /// - [`AuthError::Internal`] if the store or hasher fails.
    #[instrument(skip_all)]
    pub async fn authenticate(&self, request: &LoginRequest) -> Result<Principal, AuthError> {
        let credentials = request.credentials()?;
        self.authenticate_credentials(credentials.identifier, credentials.secret)
            .await
    }

    /// Authenticate an already shape-checked identifier and secret.
    ///
    /// # Errors
    /// Same as [`Authenticator::authenticate`], minus the shape check.
    pub async fn authenticate_credentials(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<Principal, AuthError> {
        let identifier = normalize_identifier(identifier);

        let Some(record) = self.store.find_by_identifier(identifier).await? else {
            warn!("User {identifier} authentication attempt failed - no such user");
            return Err(AuthError::NotFound);
        };

        let hasher = self.hasher.clone();
        let secret = SecretString::from(secret);
        let stored_hash = record.secret_hash;
        let matched = tokio::task::spawn_blocking(move || {
            hasher.compare(secret.expose_secret(), &stored_hash)
        })
        .await
        .context("secret comparison task failed")??;

        if !matched {
            warn!("User {identifier} authentication attempt failed - invalid secret");
            return Err(AuthError::Unauthorized);
        }

        info!("User authentication attempt succeeded {identifier}");

        Ok(Principal {
            id: record.id,
            name: record.name,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::auth::store::{CredentialRecord, MemoryCredentialStore};
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use serde_json::json;
    use uuid::Uuid;

    fn cheap_hasher() -> SecretHasher {
        SecretHasher::new(8, 1, 1).unwrap()
    }

    async fn seeded() -> (Authenticator, Arc<MemoryCredentialStore>, Uuid) {
        let hasher = cheap_hasher();
        let store = Arc::new(MemoryCredentialStore::new());
        let id = Uuid::new_v4();
        store
            .insert(CredentialRecord {
                id,
                identifier: "a@b.com".to_string(),
                secret_hash: hasher.hash("pw123456").unwrap(),
                name: "Alice".to_string(),
            })
            .await;
        (Authenticator::new(store.clone(), hasher), store, id)
    }

    fn login(body: serde_json::Value) -> LoginRequest {
        serde_json::from_value(body).unwrap()
    }

    #[tokio::test]
    async fn matching_secret_returns_principal() {
        let (authenticator, _, id) = seeded().await;
        let principal = authenticator
            .authenticate(&login(json!({"email": "a@b.com", "password": "pw123456"})))
            .await
            .unwrap();
        assert_eq!(
            principal,
            Principal {
                id,
                name: "Alice".to_string()
            }
        );
    }

    #[tokio::test]
    async fn identifier_is_trimmed_before_lookup() {
        let (authenticator, _, id) = seeded().await;
        let principal = authenticator
            .authenticate_credentials("  a@b.com \n", "pw123456")
            .await
            .unwrap();
        assert_eq!(principal.id, id);
    }

    #[tokio::test]
    async fn identifier_case_is_significant() {
        let (authenticator, _, _) = seeded().await;
        let result = authenticator
            .authenticate_credentials("A@B.COM", "pw123456")
            .await;
        assert!(matches!(result, Err(AuthError::NotFound)));
    }

    #[tokio::test]
    async fn wrong_secret_is_unauthorized() {
        let (authenticator, _, _) = seeded().await;
        let result = authenticator
            .authenticate(&login(json!({"email": "a@b.com", "password": "wrong"})))
            .await;
        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn unknown_identifier_is_not_found() {
        let (authenticator, _, _) = seeded().await;
        let result = authenticator
            .authenticate(&login(json!({"email": "nobody@x.com", "password": "pw123456"})))
            .await;
        assert!(matches!(result, Err(AuthError::NotFound)));
    }

    #[tokio::test]
    async fn malformed_body_never_reaches_store() {
        let (authenticator, store, _) = seeded().await;
        for body in [
            json!({"email": "a@b.com", "password": {"$ne": null}}),
            json!({"email": "a@b.com"}),
            json!({"password": "pw123456"}),
            json!({"email": 42, "password": "pw123456"}),
        ] {
            let result = authenticator.authenticate(&login(body)).await;
            assert!(matches!(result, Err(AuthError::BadRequest)));
        }
        assert_eq!(store.lookup_count(), 0);
    }

    struct FailingStore;

    #[async_trait]
    impl CredentialStore for FailingStore {
        async fn find_by_identifier(&self, _identifier: &str) -> Result<Option<CredentialRecord>> {
            Err(anyhow!("store unavailable"))
        }
    }

    #[tokio::test]
    async fn store_errors_propagate_unchanged() {
        let authenticator = Authenticator::new(Arc::new(FailingStore), cheap_hasher());
        let result = authenticator
            .authenticate_credentials("a@b.com", "pw123456")
            .await;
        match result {
            Err(AuthError::Internal(err)) => assert_eq!(err.to_string(), "store unavailable"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn corrupt_stored_hash_is_an_internal_error() {
        let store = Arc::new(MemoryCredentialStore::new());
        store
            .insert(CredentialRecord {
                id: Uuid::new_v4(),
                identifier: "a@b.com".to_string(),
                secret_hash: "plaintext".to_string(),
                name: "Alice".to_string(),
            })
            .await;
        let authenticator = Authenticator::new(store, cheap_hasher());
        let result = authenticator
            .authenticate_credentials("a@b.com", "plaintext")
            .await;
        assert!(matches!(result, Err(AuthError::Internal(_))));
    }
}
