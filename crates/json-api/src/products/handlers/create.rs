//! Create Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use tracing::info;

use eniqilo_app::domain::products::{data::NewProduct, records::ProductUuid};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{requests::ProductRequest, responses::ProductCreatedResponse},
    state::State,
};

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let details = json.into_inner().validate()?;

    let product = state
        .app
        .products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            details,
        })
        .await?;

    info!(product_uuid = %product.uuid, sku = %product.details.sku, "created product");

    res.status_code(StatusCode::CREATED);

    Ok(Json(ProductCreatedResponse {
        id: product.uuid.to_string(),
        created_at: product.created_at.to_string(),
    }))
}
