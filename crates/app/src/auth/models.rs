//! Staff models.

use jiff::Timestamp;

use crate::{auth::Password, uuids::TypedUuid};

/// Staff UUID
pub type StaffUuid = TypedUuid<StaffRecord>;

/// A registered staff member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffRecord {
    pub uuid: StaffUuid,
    pub name: String,
    pub phone_number: String,
    pub created_at: Timestamp,
}

/// Staff row including the stored password hash, used only while logging in.
#[derive(Debug, Clone)]
pub(crate) struct StaffAccount {
    pub record: StaffRecord,
    pub password_hash: String,
}

/// Registration payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStaff {
    pub uuid: StaffUuid,
    pub name: String,
    pub phone_number: String,
    pub password: Password,
}

/// Login payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffCredentials {
    pub phone_number: String,
    pub password: Password,
}

/// A staff member together with a freshly issued access token.
#[derive(Debug, Clone)]
pub struct StaffSession {
    pub staff: StaffRecord,
    pub access_token: String,
}

/// The authenticated caller of a protected operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffIdentity {
    pub uuid: StaffUuid,
    pub phone_number: String,
}

impl From<&StaffRecord> for StaffIdentity {
    fn from(record: &StaffRecord) -> Self {
        Self {
            uuid: record.uuid,
            phone_number: record.phone_number.clone(),
        }
    }
}
