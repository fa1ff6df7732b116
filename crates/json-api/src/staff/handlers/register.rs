//! Register Staff Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    staff::{StaffSessionResponse, requests::RegisterStaffRequest},
    state::State,
};

/// Register Staff Handler
#[endpoint(
    tags("staff"),
    summary = "Register Staff",
    responses(
        (status_code = StatusCode::CREATED, description = "Staff registered"),
        (status_code = StatusCode::CONFLICT, description = "Phone number already exists"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RegisterStaffRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<StaffSessionResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let staff = json.into_inner().validate()?;

    let session = state.app.auth.register_staff(staff).await?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(session.into()))
}
