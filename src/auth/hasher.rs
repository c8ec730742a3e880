//! One-way salted hashing of login secrets.
//!
//! Hashes are Argon2id PHC strings, so the salt and cost parameters travel with
//! the hash and verification never needs the current configuration. Comparison
//! is constant-time inside `argon2`.

use anyhow::{anyhow, Result};
use argon2::{
    password_hash::{self, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};
use rand::rngs::OsRng;

#[derive(Clone, Debug)]
pub struct SecretHasher {
    params: Params,
}

impl Default for SecretHasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl SecretHasher {
    /// Build a hasher with explicit Argon2 cost parameters.
    ///
    /// # Errors
    /// Returns an error if the parameters are outside the Argon2 limits.
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|err| anyhow!("invalid Argon2 parameters: {err}"))?;
        Ok(Self { params })
    }

    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a secret with a fresh random salt.
    ///
    /// # Errors
    /// Returns an error if Argon2 fails to produce a hash.
    pub fn hash(&self, secret: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|err| anyhow!("failed to hash secret: {err}"))?
            .to_string();
        Ok(hash)
    }

    /// Compare a secret against a stored PHC hash.
    ///
    /// A mismatch is `Ok(false)`; an unreadable stored hash is an error.
    ///
    /// # Errors
    /// Returns an error if the stored hash cannot be parsed or verification
    /// fails for a reason other than a mismatch.
    pub fn compare(&self, secret: &str, stored_hash: &str) -> Result<bool> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|err| anyhow!("invalid stored secret hash: {err}"))?;
        match self.argon2().verify_password(secret.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(anyhow!("failed to verify secret: {err}")),
        }
    }
}
