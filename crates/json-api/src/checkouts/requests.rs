//! Checkout request payload.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use eniqilo_app::{
    domain::checkouts::records::{CheckoutUuid, NewCheckout, NewLineItem},
    validation::{Violations, check_range},
};

/// One requested product line.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct LineItemRequest {
    pub product_id: Option<String>,
    pub quantity: Option<i64>,
}

/// Checkout payload.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct CheckoutRequest {
    pub customer_id: Option<String>,
    pub product_details: Option<Vec<LineItemRequest>>,
    pub paid: Option<i64>,
    pub change: Option<i64>,
}

impl CheckoutRequest {
    /// Shape checks only; whether the ids exist is decided by the checkout itself.
    pub(crate) fn validate(self) -> Result<NewCheckout, Violations> {
        let mut violations = Violations::new();

        let customer_id = violations.check("customerId", self.customer_id, |id| {
            if id.is_empty() {
                return Err("must not be empty".to_string());
            }

            Ok(())
        });
        let line_items = line_items(&mut violations, self.product_details);

        let paid = violations
            .integer("paid", self.paid, 1..=i64::MAX)
            .and_then(|paid| u64::try_from(paid).ok());

        let change = violations
            .integer("change", self.change, 0..=i64::MAX)
            .and_then(|change| u64::try_from(change).ok());

        let (Some(customer_id), Some(line_items), Some(paid), Some(change)) =
            (customer_id, line_items, paid, change)
        else {
            return Err(violations);
        };

        Ok(NewCheckout {
            uuid: CheckoutUuid::new(),
            customer_id,
            line_items,
            paid,
            change,
        })
    }
}

fn line_items(
    violations: &mut Violations,
    raw: Option<Vec<LineItemRequest>>,
) -> Option<Vec<NewLineItem>> {
    let raw = violations.check("productDetails", raw, |items| {
        if items.is_empty() {
            return Err("must contain at least 1 item".to_string());
        }

        Ok(())
    })?;

    let mut items = Vec::with_capacity(raw.len());
    let mut valid = true;

    for (index, item) in raw.into_iter().enumerate() {
        let product_id = match item.product_id {
            Some(product_id) if !product_id.is_empty() => Some(product_id),
            _ => {
                violations.push("productDetails", format!("[{index}].productId is required"));
                None
            }
        };

        let quantity = match item.quantity {
            Some(quantity) => match check_range(quantity, &(1..=i64::from(u32::MAX))) {
                Ok(()) => u32::try_from(quantity).ok(),
                Err(message) => {
                    violations.push("productDetails", format!("[{index}].quantity {message}"));
                    None
                }
            },
            None => {
                violations.push("productDetails", format!("[{index}].quantity is required"));
                None
            }
        };

        match (product_id, quantity) {
            (Some(product_id), Some(quantity)) => items.push(NewLineItem {
                product_id,
                quantity,
            }),
            _ => valid = false,
        }
    }

    valid.then_some(items)
}
