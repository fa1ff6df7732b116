//! Staff registration and login

mod handlers;
mod requests;

pub(crate) use handlers::*;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use eniqilo_app::auth::StaffSession;

/// Signed-in staff member.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StaffSessionResponse {
    pub user_id: String,
    pub phone_number: String,
    pub name: String,
    pub access_token: String,
}

impl From<StaffSession> for StaffSessionResponse {
    fn from(session: StaffSession) -> Self {
        Self {
            user_id: session.staff.uuid.to_string(),
            phone_number: session.staff.phone_number,
            name: session.staff.name,
            access_token: session.access_token,
        }
    }
}
