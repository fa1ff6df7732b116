//! Delete Product Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;

use crate::{
    errors::ApiError, extensions::*, products::parse_product_id,
    products::responses::ProductDeletedResponse, state::State,
};

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductDeletedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = parse_product_id(&id.into_inner())?;

    state.app.products.delete_product(product).await?;

    info!(product_uuid = %product, "deleted product");

    Ok(Json(ProductDeletedResponse {
        id: product.to_string(),
        deleted_at: Timestamp::now().to_string(),
    }))
}
