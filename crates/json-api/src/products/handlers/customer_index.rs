//! Customer Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use eniqilo_app::domain::products::filters::ProductListParams;

use crate::{
    errors::ApiError, extensions::*, products::responses::CustomerProductResponse, state::State,
};

/// Customer Product Index Handler
///
/// Public listing of available products.
#[endpoint(
    tags("products"),
    summary = "List Products For Customers",
    parameters(
        ("limit" = Option<String>, Query, description = "Page size, default 5"),
        ("offset" = Option<String>, Query, description = "Rows to skip, default 0"),
        ("name" = Option<String>, Query, description = "Case-insensitive name substring"),
        ("category" = Option<String>, Query, description = "Product category"),
        ("sku" = Option<String>, Query, description = "Exact SKU"),
        ("price" = Option<String>, Query, description = "asc or desc"),
        ("inStock" = Option<String>, Query, description = "true or false"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<CustomerProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let params = req.parse_queries::<ProductListParams>().unwrap_or_default();

    let products = state.app.products.list_customer_products(params).await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
