//! Credential lookup against the external user store.
//!
//! The core only reads credential records. The secret hash is selected
//! explicitly by the lookup and is never logged or returned to clients.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use tracing::Instrument;
use uuid::Uuid;

#[derive(Clone)]
pub struct CredentialRecord {
    pub id: Uuid,
    pub identifier: String,
    pub secret_hash: String,
    pub name: String,
}

impl std::fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("id", &self.id)
            .field("identifier", &self.identifier)
            .field("secret_hash", &"***")
            .field("name", &self.name)
            .finish()
    }
}

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find a credential record, including its secret hash, by exact identifier.
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<CredentialRecord>>;
}

/// Postgres-backed store reading the `users` table.
#[derive(Clone, Debug)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<CredentialRecord>> {
        let query = "SELECT id, email, password, name FROM users WHERE email = $1";
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "SELECT",
            db.statement = query
        );
        let row = sqlx::query(query)
            .bind(identifier)
            .fetch_optional(&self.pool)
            .instrument(span)
            .await
            .context("failed to lookup credential record")?;

        row.map(|row| -> Result<CredentialRecord> {
            Ok(CredentialRecord {
                id: row.try_get("id").context("invalid id column")?,
                identifier: row.try_get("email").context("invalid email column")?,
                secret_hash: row.try_get("password").context("invalid password column")?,
                name: row.try_get("name").context("invalid name column")?,
            })
        })
        .transpose()
    }
}

/// In-process store for tests and local runs without a database.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    records: RwLock<HashMap<String, CredentialRecord>>,
    lookups: AtomicUsize,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: CredentialRecord) {
        self.records
            .write()
            .await
            .insert(record.identifier.clone(), record);
    }

    /// Number of lookups served so far.
    #[must_use]
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<CredentialRecord>> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        Ok(self.records.read().await.get(identifier).cloned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record(identifier: &str) -> CredentialRecord {
        CredentialRecord {
            id: Uuid::new_v4(),
            identifier: identifier.to_string(),
            secret_hash: "$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHQ$aGFzaA".to_string(),
            name: "Alice".to_string(),
        }
    }

    #[tokio::test]
    async fn memory_store_finds_exact_identifier() {
        let store = MemoryCredentialStore::new();
        let alice = record("a@b.com");
        store.insert(alice.clone()).await;

        let found = store.find_by_identifier("a@b.com").await.unwrap().unwrap();
        assert_eq!(found.id, alice.id);
        assert_eq!(found.name, "Alice");

        assert!(store.find_by_identifier("A@B.com").await.unwrap().is_none());
        assert!(store.find_by_identifier("nobody@x.com").await.unwrap().is_none());
        assert_eq!(store.lookup_count(), 3);
    }

    #[test]
    fn debug_redacts_secret_hash() {
        let rendered = format!("{:?}", record("a@b.com"));
        assert!(rendered.contains("a@b.com"));
        assert!(!rendered.contains("argon2id"));
    }
}
