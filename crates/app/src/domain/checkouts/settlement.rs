//! Checkout settlement.
//!
//! Pure validation of a proposed sale against a snapshot of the products it names.
//! Checks run in a fixed order and the first failure wins: existence, stock,
//! availability, then payment.

use rustc_hash::FxHashMap;

use crate::domain::{checkouts::errors::CheckoutsServiceError, products::records::ProductUuid};

/// The fields of a product row that settlement looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSnapshot {
    pub uuid: ProductUuid,
    pub name: String,
    pub price: u64,
    pub stock: u32,
    pub is_available: bool,
}

/// Total quantity requested for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Demand {
    pub product: ProductUuid,
    pub quantity: u64,
}

/// Outcome of a sale that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub total: u64,
    pub change: u64,
    pub demand: Vec<Demand>,
}

/// Sum quantities per product, keeping the order in which products first appear.
#[must_use]
pub fn aggregate_demand(items: &[(ProductUuid, u32)]) -> Vec<Demand> {
    let mut positions: FxHashMap<ProductUuid, usize> = FxHashMap::default();
    let mut demand: Vec<Demand> = Vec::with_capacity(items.len());

    for &(product, quantity) in items {
        match positions.get(&product) {
            Some(&index) => demand[index].quantity += u64::from(quantity),
            None => {
                positions.insert(product, demand.len());
                demand.push(Demand {
                    product,
                    quantity: u64::from(quantity),
                });
            }
        }
    }

    demand
}

/// Validate `demand` against `products` and compute the total and change.
///
/// # Errors
///
/// Returns the first rejection found, in check order.
pub fn settle(
    demand: Vec<Demand>,
    products: &[ProductSnapshot],
    paid: u64,
    declared_change: u64,
) -> Result<Settlement, CheckoutsServiceError> {
    let by_uuid: FxHashMap<ProductUuid, &ProductSnapshot> =
        products.iter().map(|product| (product.uuid, product)).collect();

    let lines = demand
        .iter()
        .map(|wanted| {
            by_uuid
                .get(&wanted.product)
                .map(|product| (wanted.quantity, *product))
                .ok_or(CheckoutsServiceError::ProductNotFound)
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some((_, product)) = lines
        .iter()
        .find(|(quantity, product)| u64::from(product.stock) < *quantity)
    {
        return Err(CheckoutsServiceError::InsufficientStock {
            name: product.name.clone(),
        });
    }

    if lines.iter().any(|(_, product)| !product.is_available) {
        return Err(CheckoutsServiceError::ProductUnavailable);
    }

    let total = lines.iter().try_fold(0_u64, |total, (quantity, product)| {
        product
            .price
            .checked_mul(*quantity)
            .and_then(|line_total| total.checked_add(line_total))
            .ok_or(CheckoutsServiceError::TotalOverflow)
    })?;

    let Some(change) = paid.checked_sub(total) else {
        return Err(CheckoutsServiceError::InsufficientPayment { total });
    };

    if change != declared_change {
        return Err(CheckoutsServiceError::IncorrectChange { expected: change });
    }

    Ok(Settlement {
        total,
        change,
        demand,
    })
}
