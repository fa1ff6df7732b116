//! Customer Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use eniqilo_app::domain::customers::filters::CustomerListParams;

use crate::{customers::CustomerResponse, errors::ApiError, extensions::*, state::State};

/// Customer Index Handler
#[endpoint(
    tags("customers"),
    summary = "List Customers",
    security(("bearer_auth" = [])),
    parameters(
        ("name" = Option<String>, Query, description = "Case-insensitive name substring"),
        ("phoneNumber" = Option<String>, Query, description = "Phone number prefix"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let params = req.parse_queries::<CustomerListParams>().unwrap_or_default();

    let customers = state.app.customers.list_customers(params).await?;

    Ok(Json(customers.into_iter().map(Into::into).collect()))
}
