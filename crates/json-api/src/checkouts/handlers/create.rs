//! Create Checkout Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use eniqilo_app::domain::checkouts::records::CheckoutRecord;

use crate::{
    checkouts::requests::CheckoutRequest,
    errors::ApiError,
    extensions::*,
    observability::{CheckoutOutcome, observe_checkout},
    state::State,
};

/// Checkout Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutCreatedResponse {
    pub id: String,
    pub created_at: String,
}

/// Create Checkout Handler
///
/// Sells the requested products to a registered customer in one transaction.
#[endpoint(
    tags("checkouts"),
    summary = "Create Checkout",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Checkout recorded"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer or product not found"),
        (status_code = StatusCode::CONFLICT, description = "Stock changed during checkout"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CheckoutCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let staff = depot.staff_or_401()?;

    let result = checkout(state, json.into_inner()).await;

    observe_checkout(match &result {
        Ok(_) => CheckoutOutcome::Succeeded,
        Err(error) => CheckoutOutcome::from_error_kind(error.kind()),
    });

    let checkout = result?;

    info!(
        checkout_uuid = %checkout.uuid,
        customer_uuid = %checkout.customer,
        staff_uuid = %staff.uuid,
        paid = checkout.paid,
        "checkout completed"
    );

    res.status_code(StatusCode::CREATED);

    Ok(Json(CheckoutCreatedResponse {
        id: checkout.uuid.to_string(),
        created_at: checkout.created_at.to_string(),
    }))
}

async fn checkout(state: &State, request: CheckoutRequest) -> Result<CheckoutRecord, ApiError> {
    let checkout = request.validate()?;

    Ok(state.app.checkouts.create_checkout(checkout).await?)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use eniqilo_app::domain::{
        checkouts::{CheckoutsServiceError, MockCheckoutsService, records::CheckoutUuid},
        customers::records::CustomerUuid,
    };

    use crate::{errors::ErrorBody, test_helpers::checkouts};

    use super::*;

    fn make_service(service: MockCheckoutsService) -> Service {
        checkouts(service).authenticated(Router::with_path("v1/product/checkout").post(handler))
    }

    fn body(paid: u64) -> serde_json::Value {
        json!({
            "customerId": "0192f0c1-0000-7000-8000-000000000001",
            "productDetails": [{ "productId": "0192f0c1-0000-7000-8000-000000000002", "quantity": 2 }],
            "paid": paid,
            "change": 0,
        })
    }

    #[tokio::test]
    async fn test_checkout_success_returns_201() -> TestResult {
        let mut service = MockCheckoutsService::new();

        service
            .expect_create_checkout()
            .once()
            .withf(|checkout| {
                checkout.paid == 20
                    && checkout.change == 0
                    && checkout.line_items.len() == 1
                    && checkout.line_items.iter().all(|item| item.quantity == 2)
            })
            .return_once(|checkout| {
                Ok(CheckoutRecord {
                    uuid: checkout.uuid,
                    customer: CustomerUuid::new(),
                    paid: checkout.paid,
                    change: checkout.change,
                    created_at: Timestamp::UNIX_EPOCH,
                })
            });

        let mut res = TestClient::post("http://example.com/v1/product/checkout")
            .json(&body(20))
            .send(&make_service(service))
            .await;

        let created: CheckoutCreatedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert!(CheckoutUuid::parse(&created.id).is_some(), "id should be a uuid");
        assert_eq!(created.created_at, "1970-01-01T00:00:00Z");

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_insufficient_payment_reports_total() -> TestResult {
        let mut service = MockCheckoutsService::new();

        service
            .expect_create_checkout()
            .once()
            .return_once(|_| Err(CheckoutsServiceError::InsufficientPayment { total: 20 }));

        let mut res = TestClient::post("http://example.com/v1/product/checkout")
            .json(&body(15))
            .send(&make_service(service))
            .await;

        let error: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            error,
            ErrorBody {
                message: "not enough money, total price is 20".to_string(),
                status: 400,
                error: "BAD_REQUEST".to_string(),
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_unknown_customer_returns_404() -> TestResult {
        let mut service = MockCheckoutsService::new();

        service
            .expect_create_checkout()
            .once()
            .return_once(|_| Err(CheckoutsServiceError::CustomerNotFound));

        let mut res = TestClient::post("http://example.com/v1/product/checkout")
            .json(&body(20))
            .send(&make_service(service))
            .await;

        let error: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(error.message, "customerId is not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_stock_conflict_returns_409() -> TestResult {
        let mut service = MockCheckoutsService::new();

        service
            .expect_create_checkout()
            .once()
            .return_once(|_| Err(CheckoutsServiceError::StockConflict));

        let res = TestClient::post("http://example.com/v1/product/checkout")
            .json(&body(20))
            .send(&make_service(service))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_malformed_payload_never_reaches_service() -> TestResult {
        let mut service = MockCheckoutsService::new();

        service.expect_create_checkout().never();

        let res = TestClient::post("http://example.com/v1/product/checkout")
            .json(&json!({ "customerId": "c1", "productDetails": [], "paid": 20, "change": 0 }))
            .send(&make_service(service))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
