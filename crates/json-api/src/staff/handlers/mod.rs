//! Staff Handlers

pub(crate) mod login;
pub(crate) mod register;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use eniqilo_app::auth::{StaffRecord, StaffSession, StaffUuid};

    pub(super) fn make_session(phone_number: &str) -> StaffSession {
        StaffSession {
            staff: StaffRecord {
                uuid: StaffUuid::new(),
                name: "Store Admin".to_string(),
                phone_number: phone_number.to_string(),
                created_at: Timestamp::UNIX_EPOCH,
            },
            access_token: "signed.jwt.token".to_string(),
        }
    }
}
