//! Checkout History Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use eniqilo_app::domain::checkouts::{
    history::HistoryParams,
    records::{CheckoutHistoryEntry, PurchasedItem},
};

use crate::{errors::ApiError, extensions::*, state::State};

/// A purchased product line.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductDetailResponse {
    pub product_id: String,
    pub quantity: u32,
}

impl From<PurchasedItem> for ProductDetailResponse {
    fn from(item: PurchasedItem) -> Self {
        Self {
            product_id: item.product.to_string(),
            quantity: item.quantity,
        }
    }
}

/// A past checkout.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutHistoryResponse {
    pub transaction_id: String,
    pub created_at: String,
    pub customer_id: String,
    pub product_details: Vec<ProductDetailResponse>,
    pub paid: u64,
    pub change: u64,
}

impl From<CheckoutHistoryEntry> for CheckoutHistoryResponse {
    fn from(entry: CheckoutHistoryEntry) -> Self {
        let checkout = entry.checkout;

        Self {
            transaction_id: checkout.uuid.to_string(),
            created_at: checkout.created_at.to_string(),
            customer_id: checkout.customer.to_string(),
            product_details: entry.items.into_iter().map(Into::into).collect(),
            paid: checkout.paid,
            change: checkout.change,
        }
    }
}

/// Checkout History Handler
#[endpoint(
    tags("checkouts"),
    summary = "Checkout History",
    security(("bearer_auth" = [])),
    parameters(
        ("customerId" = Option<String>, Query, description = "Only this customer's checkouts"),
        ("limit" = Option<String>, Query, description = "Checkouts per page, default 5"),
        ("offset" = Option<String>, Query, description = "Checkouts to skip, default 0"),
        ("createdAt" = Option<String>, Query, description = "asc or desc, default desc"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<CheckoutHistoryResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let params = req.parse_queries::<HistoryParams>().unwrap_or_default();

    let history = state.app.checkouts.checkout_history(params).await?;

    Ok(Json(history.into_iter().map(Into::into).collect()))
}
