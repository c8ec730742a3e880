//! Request/response types for the login endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::error::AuthError;

/// Login body as submitted by the client.
///
/// Fields are kept as raw JSON so a missing or non-string value is reported as
/// a bad request instead of a body rejection.
#[derive(ToSchema, Serialize, Deserialize, Default)]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(value_type = String, example = "a@b.com")]
    pub email: Value,
    #[serde(default)]
    #[schema(value_type = String, format = Password)]
    pub password: Value,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Validated login input borrowed from a [`LoginRequest`].
#[derive(Clone, Copy)]
pub struct Credentials<'a> {
    pub identifier: &'a str,
    pub secret: &'a str,
}

impl LoginRequest {
    /// Check both fields are present JSON strings.
    ///
    /// # Errors
    /// Returns [`AuthError::BadRequest`] for missing or non-string fields.
    pub fn credentials(&self) -> Result<Credentials<'_>, AuthError> {
        match (self.email.as_str(), self.password.as_str()) {
            (Some(identifier), Some(secret)) => Ok(Credentials { identifier, secret }),
            _ => Err(AuthError::BadRequest),
        }
    }
}

/// Profile data returned once a session is established.
#[derive(ToSchema, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct UserMetadata {
    pub name: String,
}
