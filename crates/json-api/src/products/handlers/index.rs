//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use eniqilo_app::domain::products::filters::ProductListParams;

use crate::{
    errors::ApiError, extensions::*, products::responses::ProductResponse, state::State,
};

/// Product Index Handler
///
/// Lists products for staff. Unparseable filter values are ignored.
#[endpoint(
    tags("products"),
    summary = "List Products",
    security(("bearer_auth" = [])),
    parameters(
        ("id" = Option<String>, Query, description = "Exact product id"),
        ("limit" = Option<String>, Query, description = "Page size, default 5"),
        ("offset" = Option<String>, Query, description = "Rows to skip, default 0"),
        ("name" = Option<String>, Query, description = "Case-insensitive name substring"),
        ("isAvailable" = Option<String>, Query, description = "true or false"),
        ("category" = Option<String>, Query, description = "Product category"),
        ("sku" = Option<String>, Query, description = "Exact SKU"),
        ("price" = Option<String>, Query, description = "asc or desc"),
        ("inStock" = Option<String>, Query, description = "true or false"),
        ("createdAt" = Option<String>, Query, description = "asc or desc"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let params = req.parse_queries::<ProductListParams>().unwrap_or_default();

    let products = state.app.products.list_products(params).await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
