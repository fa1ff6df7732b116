//! Auth service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind as DbErrorKind},
};
use thiserror::Error;

use crate::{
    auth::{AccessTokenError, PasswordError},
    errors::{ClassifiedError, ErrorKind},
};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("phone number already exists")]
    AlreadyExists,

    #[error("staff is not found")]
    NotFound,

    #[error("password is wrong")]
    WrongPassword,

    #[error("invalid token")]
    InvalidToken,

    #[error("password processing error")]
    Password(#[from] PasswordError),

    #[error("token processing error")]
    Token(#[from] AccessTokenError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AuthServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(DbErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(_) | None => Self::Sql(error),
        }
    }
}

impl ClassifiedError for AuthServiceError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyExists => ErrorKind::Conflict,
            Self::NotFound => ErrorKind::NotFound,
            Self::WrongPassword => ErrorKind::BadRequest,
            Self::InvalidToken => ErrorKind::Unauthenticated,
            Self::Password(_) | Self::Token(_) | Self::Sql(_) => ErrorKind::InternalServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = AuthServiceError::from(Error::RowNotFound);

        assert!(matches!(error, AuthServiceError::NotFound));
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn other_storage_errors_are_internal() {
        let error = AuthServiceError::from(Error::PoolTimedOut);

        assert!(matches!(error, AuthServiceError::Sql(_)));
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
    }

    #[test]
    fn invalid_token_is_unauthenticated() {
        assert_eq!(
            AuthServiceError::InvalidToken.kind(),
            ErrorKind::Unauthenticated
        );
        assert_eq!(AuthServiceError::InvalidToken.to_string(), "invalid token");
    }
}
