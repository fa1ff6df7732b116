//! Auth service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::{
    auth::{
        AuthServiceError, NewStaff, StaffCredentials, StaffIdentity, StaffRecord, StaffSession,
        TokenSigner,
        password::{hash_password_blocking, verify_password_blocking},
        repository::PgAuthRepository,
    },
    database::Db,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    db: Db,
    repository: PgAuthRepository,
    tokens: TokenSigner,
}

impl PgAuthService {
    #[must_use]
    pub fn new(db: Db, tokens: TokenSigner) -> Self {
        Self {
            db,
            repository: PgAuthRepository::new(),
            tokens,
        }
    }

    fn open_session(&self, staff: StaffRecord) -> Result<StaffSession, AuthServiceError> {
        let access_token = self
            .tokens
            .issue(&StaffIdentity::from(&staff), Timestamp::now())?;

        Ok(StaffSession {
            staff,
            access_token,
        })
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn register_staff(&self, staff: NewStaff) -> Result<StaffSession, AuthServiceError> {
        let NewStaff {
            uuid,
            name,
            phone_number,
            password,
        } = staff;

        let password_hash = hash_password_blocking(password).await?;

        let mut tx = self.db.begin_transaction().await?;

        let record = self
            .repository
            .create_staff(&mut tx, uuid, &name, &phone_number, &password_hash)
            .await?;

        tx.commit().await?;

        self.open_session(record)
    }

    async fn login(&self, credentials: StaffCredentials) -> Result<StaffSession, AuthServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let account = self
            .repository
            .find_staff_by_phone_number(&mut tx, &credentials.phone_number)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        tx.commit().await?;

        if !verify_password_blocking(credentials.password, account.password_hash).await? {
            return Err(AuthServiceError::WrongPassword);
        }

        self.open_session(account.record)
    }

    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<StaffIdentity, AuthServiceError> {
        let identity = self.tokens.verify(bearer_token).map_err(|error| {
            debug!("rejected access token: {error}");

            AuthServiceError::InvalidToken
        })?;

        let mut tx = self.db.begin_transaction().await?;

        let staff = self.repository.find_staff(&mut tx, identity.uuid).await?;

        tx.commit().await?;

        // The phone number is part of the signed claims; a mismatch means the token
        // predates a change to the account.
        match staff {
            Some(staff) if staff.phone_number == identity.phone_number => Ok(identity),
            Some(_) | None => Err(AuthServiceError::InvalidToken),
        }
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Creates a staff account and signs the new member in.
    async fn register_staff(&self, staff: NewStaff) -> Result<StaffSession, AuthServiceError>;

    /// Checks credentials and issues a new access token.
    async fn login(&self, credentials: StaffCredentials) -> Result<StaffSession, AuthServiceError>;

    /// Resolves a bearer token to the staff member it was issued for.
    async fn authenticate_bearer(&self, bearer_token: &str)
    -> Result<StaffIdentity, AuthServiceError>;
}
