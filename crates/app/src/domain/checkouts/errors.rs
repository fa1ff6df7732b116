//! Checkouts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind as DbErrorKind},
};
use thiserror::Error;

use crate::errors::{ClassifiedError, ErrorKind};

#[derive(Debug, Error)]
pub enum CheckoutsServiceError {
    #[error("customerId is not found")]
    CustomerNotFound,

    #[error("one of productIds is not found")]
    ProductNotFound,

    #[error("{name} stock is not enough")]
    InsufficientStock { name: String },

    #[error("one of productIds isAvailable == false")]
    ProductUnavailable,

    #[error("not enough money, total price is {total}")]
    InsufficientPayment { total: u64 },

    #[error("change is incorrect should be {expected}")]
    IncorrectChange { expected: u64 },

    #[error("total price is too large")]
    TotalOverflow,

    #[error("stock changed during checkout, please retry")]
    StockConflict,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CheckoutsServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(DbErrorKind::ForeignKeyViolation) => Self::CustomerNotFound,
            Some(DbErrorKind::CheckViolation) => Self::StockConflict,
            Some(_) | None => Self::Sql(error),
        }
    }
}

impl ClassifiedError for CheckoutsServiceError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::CustomerNotFound | Self::ProductNotFound => ErrorKind::NotFound,
            Self::InsufficientStock { .. }
            | Self::ProductUnavailable
            | Self::InsufficientPayment { .. }
            | Self::IncorrectChange { .. }
            | Self::TotalOverflow => ErrorKind::BadRequest,
            Self::StockConflict => ErrorKind::Conflict,
            Self::Sql(_) => ErrorKind::InternalServerError,
        }
    }
}
