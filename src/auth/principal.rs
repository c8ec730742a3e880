//! Authenticated identity handed to downstream handlers.
//!
//! A principal lives for one request: it is produced either by the
//! authenticator after a credential check or rebuilt from token claims by the
//! session manager. It is never persisted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::token::TokenClaims;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: Uuid,
    pub name: String,
}

impl From<TokenClaims> for Principal {
    fn from(claims: TokenClaims) -> Self {
        Self {
            id: claims.id,
            name: claims.name,
        }
    }
}
