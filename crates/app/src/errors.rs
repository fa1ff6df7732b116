//! Error classification shared by every service.

use std::error::Error;

/// The category a service failure falls into, independent of transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    Conflict,
    Unauthenticated,
    InternalServerError,
}

impl ErrorKind {
    /// Stable machine-readable name reported to clients.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT_ERROR",
            Self::Unauthenticated => "NOT_AUTHENTICATED",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    /// HTTP status code conventionally used for this kind.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::Unauthenticated => 401,
            Self::InternalServerError => 500,
        }
    }
}

/// Errors that know which [`ErrorKind`] they belong to.
///
/// The `Display` output of a non-internal error is safe to show to clients.
pub trait ClassifiedError: Error + Send + Sync + 'static {
    fn kind(&self) -> ErrorKind;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_wire_names_and_statuses() {
        let table = [
            (ErrorKind::BadRequest, "BAD_REQUEST", 400),
            (ErrorKind::NotFound, "NOT_FOUND", 404),
            (ErrorKind::Conflict, "CONFLICT_ERROR", 409),
            (ErrorKind::Unauthenticated, "NOT_AUTHENTICATED", 401),
            (ErrorKind::InternalServerError, "INTERNAL_SERVER_ERROR", 500),
        ];

        for (kind, name, status) in table {
            assert_eq!(kind.as_str(), name);
            assert_eq!(kind.status_code(), status);
        }
    }
}
