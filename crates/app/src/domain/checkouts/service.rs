//! Checkouts service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        checkouts::{
            errors::CheckoutsServiceError,
            history::{HistoryParams, HistoryQuery, group_rows},
            records::{CheckoutHistoryEntry, CheckoutRecord, LineItemUuid, NewCheckout, PurchasedItem},
            repository::{LineItemRow, PgCheckoutsRepository},
            settlement::{aggregate_demand, settle},
        },
        customers::records::CustomerUuid,
        products::records::ProductUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCheckoutsService {
    db: Db,
    repository: PgCheckoutsRepository,
}

impl PgCheckoutsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCheckoutsRepository::new(),
        }
    }
}

#[async_trait]
impl CheckoutsService for PgCheckoutsService {
    async fn create_checkout(
        &self,
        checkout: NewCheckout,
    ) -> Result<CheckoutRecord, CheckoutsServiceError> {
        let NewCheckout {
            uuid,
            customer_id,
            line_items,
            paid,
            change,
        } = checkout;

        let customer =
            CustomerUuid::parse(&customer_id).ok_or(CheckoutsServiceError::CustomerNotFound)?;

        // Dropping `tx` on any early return rolls back, including the row locks.
        let mut tx = self.db.begin_transaction().await?;

        if !self.repository.customer_exists(&mut tx, customer).await? {
            return Err(CheckoutsServiceError::CustomerNotFound);
        }

        let items = line_items
            .iter()
            .map(|line| {
                ProductUuid::parse(&line.product_id)
                    .map(|product| PurchasedItem {
                        product,
                        quantity: line.quantity,
                    })
                    .ok_or(CheckoutsServiceError::ProductNotFound)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let demand = aggregate_demand(
            &items
                .iter()
                .map(|item| (item.product, item.quantity))
                .collect::<Vec<_>>(),
        );

        let mut lock_order: Vec<ProductUuid> = demand.iter().map(|wanted| wanted.product).collect();
        lock_order.sort_unstable();

        let products = self.repository.lock_products(&mut tx, &lock_order).await?;

        let settlement = settle(demand, &products, paid, change)?;

        let record = self
            .repository
            .create_checkout(&mut tx, uuid, customer, paid, settlement.change)
            .await?;

        let rows: Vec<LineItemRow> = items
            .into_iter()
            .map(|item| LineItemRow {
                uuid: LineItemUuid::new(),
                item,
            })
            .collect();

        self.repository
            .create_line_items(&mut tx, uuid, &rows)
            .await?;

        for wanted in &settlement.demand {
            let updated = self
                .repository
                .decrement_stock(&mut tx, wanted.product, wanted.quantity)
                .await?;

            if updated == 0 {
                debug!(product = %wanted.product, "guarded stock decrement matched no row");

                return Err(CheckoutsServiceError::StockConflict);
            }
        }

        tx.commit().await?;

        info!(
            checkout = %record.uuid,
            customer = %record.customer,
            total = settlement.total,
            lines = rows.len(),
            "checkout committed"
        );

        Ok(record)
    }

    async fn checkout_history(
        &self,
        params: HistoryParams,
    ) -> Result<Vec<CheckoutHistoryEntry>, CheckoutsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows = self
            .repository
            .checkout_history(&mut tx, HistoryQuery::from(&params))
            .await?;

        tx.commit().await?;

        Ok(group_rows(rows))
    }
}

#[automock]
#[async_trait]
pub trait CheckoutsService: Send + Sync {
    /// Validates a sale and, when it passes, records it and takes the sold units out of
    /// stock in one transaction.
    async fn create_checkout(
        &self,
        checkout: NewCheckout,
    ) -> Result<CheckoutRecord, CheckoutsServiceError>;

    /// Lists past checkouts with their line items.
    async fn checkout_history(
        &self,
        params: HistoryParams,
    ) -> Result<Vec<CheckoutHistoryEntry>, CheckoutsServiceError>;
}
