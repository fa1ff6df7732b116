//! Password handling.

use std::fmt;

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use thiserror::Error;
use tokio::task;
use zeroize::Zeroize;

/// A plaintext password. The buffer is wiped on drop and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(**redacted**)")
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password hashing failed")]
    Hash(#[source] argon2::password_hash::Error),

    #[error("password hashing task failed")]
    Task(#[source] task::JoinError),
}

/// Hash `password` into a PHC string.
pub(crate) fn hash_password(password: &Password) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.expose().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(PasswordError::Hash)
}

/// Check `password` against a stored PHC string.
pub(crate) fn verify_password(password: &Password, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(PasswordError::Hash)?;

    match Argon2::default().verify_password(password.expose().as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(error) => Err(PasswordError::Hash(error)),
    }
}

/// [`hash_password`] on the blocking pool.
pub(crate) async fn hash_password_blocking(password: Password) -> Result<String, PasswordError> {
    task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(PasswordError::Task)?
}

/// [`verify_password`] on the blocking pool.
pub(crate) async fn verify_password_blocking(
    password: Password,
    hash: String,
) -> Result<bool, PasswordError> {
    task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(PasswordError::Task)?
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn hash_then_verify_accepts_same_password() -> TestResult {
        let password = Password::new("hunter22");
        let hash = hash_password(&password)?;

        assert!(hash.starts_with("$argon2"), "expected a PHC string");
        assert!(verify_password(&password, &hash)?);

        Ok(())
    }

    #[test]
    fn verify_rejects_other_password() -> TestResult {
        let hash = hash_password(&Password::new("hunter22"))?;

        assert!(!verify_password(&Password::new("hunter23"), &hash)?);

        Ok(())
    }

    #[test]
    fn verify_reports_corrupt_hash() {
        let result = verify_password(&Password::new("hunter22"), "not-a-hash");

        assert!(matches!(result, Err(PasswordError::Hash(_))));
    }

    #[test]
    fn debug_output_is_redacted() {
        assert_eq!(
            format!("{:?}", Password::new("hunter22")),
            "Password(**redacted**)"
        );
    }

    #[tokio::test]
    async fn blocking_variants_round_trip() -> TestResult {
        let hash = hash_password_blocking(Password::new("secret")).await?;

        assert!(verify_password_blocking(Password::new("secret"), hash).await?);

        Ok(())
    }
}
