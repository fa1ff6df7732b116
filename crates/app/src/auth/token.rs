//! Access token issuing and verification.
//!
//! Tokens are HS256 JWTs carrying the staff id, the staff phone number and an
//! expiry.

use std::{fmt, time::Duration};

use jiff::Timestamp;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::auth::{StaffIdentity, StaffUuid};

/// Default access token lifetime.
pub const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(8 * 60 * 60);

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccessClaims {
    id: Uuid,
    phone_number: String,
    exp: i64,
}

#[derive(Debug, Error)]
pub enum AccessTokenError {
    #[error("access token lifetime is too large")]
    Lifetime,

    #[error("access token could not be encoded")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("access token is invalid")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies access tokens with a shared secret.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    lifetime: Duration,
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

impl TokenSigner {
    #[must_use]
    pub fn new(secret: &[u8], lifetime: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            lifetime,
        }
    }

    /// Issue a token for `identity` that expires one lifetime after `now`.
    ///
    /// # Errors
    ///
    /// Returns an error when the expiry overflows or encoding fails.
    pub fn issue(&self, identity: &StaffIdentity, now: Timestamp) -> Result<String, AccessTokenError> {
        let lifetime =
            i64::try_from(self.lifetime.as_secs()).map_err(|_overflow| AccessTokenError::Lifetime)?;

        let exp = now
            .as_second()
            .checked_add(lifetime)
            .ok_or(AccessTokenError::Lifetime)?;

        let claims = AccessClaims {
            id: identity.uuid.into_uuid(),
            phone_number: identity.phone_number.clone(),
            exp,
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(AccessTokenError::Encode)
    }

    /// Check signature and expiry and return the identity the token was issued for.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed, tampered or expired tokens.
    pub fn verify(&self, token: &str) -> Result<StaffIdentity, AccessTokenError> {
        let data = decode::<AccessClaims>(token, &self.decoding, &Validation::default())
            .map_err(AccessTokenError::Invalid)?;

        Ok(StaffIdentity {
            uuid: StaffUuid::from_uuid(data.claims.id),
            phone_number: data.claims.phone_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;
    use testresult::TestResult;

    use super::*;

    fn identity() -> StaffIdentity {
        StaffIdentity {
            uuid: StaffUuid::from_uuid(Uuid::nil()),
            phone_number: "+628123456789".to_string(),
        }
    }

    #[test]
    fn issued_token_verifies_to_same_identity() -> TestResult {
        let signer = TokenSigner::new(b"secret", DEFAULT_TOKEN_LIFETIME);
        let token = signer.issue(&identity(), Timestamp::now())?;

        assert_eq!(signer.verify(&token)?, identity());

        Ok(())
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() -> TestResult {
        let token = TokenSigner::new(b"secret", DEFAULT_TOKEN_LIFETIME)
            .issue(&identity(), Timestamp::now())?;

        let result = TokenSigner::new(b"other", DEFAULT_TOKEN_LIFETIME).verify(&token);

        assert!(matches!(result, Err(AccessTokenError::Invalid(_))));

        Ok(())
    }

    #[test]
    fn expired_token_is_rejected() -> TestResult {
        let signer = TokenSigner::new(b"secret", DEFAULT_TOKEN_LIFETIME);
        let issued_at = Timestamp::now().checked_sub(SignedDuration::from_hours(24))?;
        let token = signer.issue(&identity(), issued_at)?;

        assert!(matches!(
            signer.verify(&token),
            Err(AccessTokenError::Invalid(_))
        ));

        Ok(())
    }

    #[test]
    fn garbage_is_rejected() {
        let signer = TokenSigner::new(b"secret", DEFAULT_TOKEN_LIFETIME);

        assert!(signer.verify("not.a.jwt").is_err());
        assert!(signer.verify("").is_err());
    }

    #[test]
    fn debug_output_hides_keys() {
        let signer = TokenSigner::new(b"secret", DEFAULT_TOKEN_LIFETIME);

        assert!(!format!("{signer:?}").contains("secret"));
    }
}
