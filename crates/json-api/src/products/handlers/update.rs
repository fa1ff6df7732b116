//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use tracing::info;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{parse_product_id, requests::ProductRequest, responses::ProductUpdatedResponse},
    state::State,
};

/// Update Product Handler
///
/// Replaces every attribute of a product.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, json, depot),
    fields(product_uuid = tracing::field::Empty),
    err(Debug)
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductUpdatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = parse_product_id(&id.into_inner())?;

    tracing::Span::current().record("product_uuid", tracing::field::display(product));

    let details = json.into_inner().validate()?;

    let updated = state.app.products.update_product(product, details).await?;

    info!(product_uuid = %product, "updated product");

    Ok(Json(ProductUpdatedResponse {
        id: updated.uuid.to_string(),
        updated_at: updated.updated_at.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use eniqilo_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductUuid,
    };

    use crate::{errors::ErrorBody, test_helpers::products};

    use super::{super::tests::*, *};

    fn make_service(service: MockProductsService) -> Service {
        products(service).authenticated(Router::with_path("v1/product/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_product_success() -> TestResult {
        let uuid = ProductUuid::new();

        let mut service = MockProductsService::new();

        service
            .expect_update_product()
            .once()
            .withf(move |u, details| *u == uuid && *details == make_details())
            .return_once(move |_, _| Ok(make_product(uuid)));

        let mut res = TestClient::put(format!("http://example.com/v1/product/{uuid}"))
            .json(&product_body())
            .send(&make_service(service))
            .await;

        let body: ProductUpdatedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, uuid.to_string());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_malformed_id_returns_404() -> TestResult {
        let mut service = MockProductsService::new();

        service.expect_update_product().never();

        let mut res = TestClient::put("http://example.com/v1/product/123")
            .json(&product_body())
            .send(&make_service(service))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "product is not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_unknown_id_returns_404() -> TestResult {
        let mut service = MockProductsService::new();

        service
            .expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/v1/product/{}", ProductUuid::new()))
            .json(&product_body())
            .send(&make_service(service))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
