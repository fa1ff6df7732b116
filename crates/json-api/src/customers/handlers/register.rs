//! Register Customer Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use tracing::info;

use crate::{
    customers::{CustomerResponse, RegisterCustomerRequest},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Register Customer Handler
#[endpoint(
    tags("customers"),
    summary = "Register Customer",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Customer registered"),
        (status_code = StatusCode::CONFLICT, description = "Phone number already exists"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RegisterCustomerRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CustomerResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let staff = depot.staff_or_401()?;
    let customer = json.into_inner().validate()?;

    let customer = state.app.customers.register_customer(customer).await?;

    info!(customer_uuid = %customer.uuid, staff_uuid = %staff.uuid, "registered customer");

    res.status_code(StatusCode::CREATED);

    Ok(Json(customer.into()))
}
