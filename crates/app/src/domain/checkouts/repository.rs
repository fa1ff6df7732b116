//! Checkouts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{
    FromRow, Postgres, QueryBuilder, Row, Transaction, postgres::PgRow, query, query_as,
    query_scalar,
};
use uuid::Uuid;

use crate::domain::{
    checkouts::{
        history::{HistoryQuery, HistoryRow},
        records::{CheckoutRecord, CheckoutUuid, LineItemUuid, PurchasedItem},
        settlement::ProductSnapshot,
    },
    customers::records::CustomerUuid,
    products::records::ProductUuid,
};

const CUSTOMER_EXISTS_SQL: &str = include_str!("sql/customer_exists.sql");
const LOCK_PRODUCTS_SQL: &str = include_str!("sql/lock_products.sql");
const CREATE_CHECKOUT_SQL: &str = include_str!("sql/create_checkout.sql");
const DECREMENT_STOCK_SQL: &str = include_str!("sql/decrement_stock.sql");

/// A line item ready to be written.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineItemRow {
    pub uuid: LineItemUuid,
    pub item: PurchasedItem,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCheckoutsRepository;

impl PgCheckoutsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn customer_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(CUSTOMER_EXISTS_SQL)
            .bind(customer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Read and lock the named products, in id order.
    pub(crate) async fn lock_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &[ProductUuid],
    ) -> Result<Vec<ProductSnapshot>, sqlx::Error> {
        let uuids: Vec<Uuid> = products.iter().map(|product| product.into_uuid()).collect();

        query_as::<Postgres, ProductSnapshot>(LOCK_PRODUCTS_SQL)
            .bind(uuids)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_checkout(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        checkout: CheckoutUuid,
        customer: CustomerUuid,
        paid: u64,
        change: u64,
    ) -> Result<CheckoutRecord, sqlx::Error> {
        query_as::<Postgres, CheckoutRecord>(CREATE_CHECKOUT_SQL)
            .bind(checkout.into_uuid())
            .bind(customer.into_uuid())
            .bind(encode_amount(paid)?)
            .bind(encode_amount(change)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_line_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        checkout: CheckoutUuid,
        items: &[LineItemRow],
    ) -> Result<(), sqlx::Error> {
        let mut rows = Vec::with_capacity(items.len());

        for (position, row) in items.iter().enumerate() {
            let position = i32::try_from(position).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
            let quantity =
                i32::try_from(row.item.quantity).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

            rows.push((row.uuid.into_uuid(), row.item.product.into_uuid(), quantity, position));
        }

        let mut builder = QueryBuilder::<Postgres>::new(
            "INSERT INTO checkout_line_items (id, checkout_id, product_id, quantity, position) ",
        );

        builder.push_values(rows, |mut values, (uuid, product, quantity, position)| {
            values
                .push_bind(uuid)
                .push_bind(checkout.into_uuid())
                .push_bind(product)
                .push_bind(quantity)
                .push_bind(position);
        });

        builder.build().execute(&mut **tx).await?;

        Ok(())
    }

    /// Take `quantity` units out of stock. Returns the number of rows updated, which is
    /// zero when the product no longer has enough stock.
    pub(crate) async fn decrement_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        quantity: u64,
    ) -> Result<u64, sqlx::Error> {
        let quantity = i32::try_from(quantity).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        let rows_affected = query(DECREMENT_STOCK_SQL)
            .bind(product.into_uuid())
            .bind(quantity)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn checkout_history(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        listing: HistoryQuery,
    ) -> Result<Vec<HistoryRow>, sqlx::Error> {
        let mut builder = listing.to_sql();

        builder
            .build_query_as::<HistoryRow>()
            .fetch_all(&mut **tx)
            .await
    }
}

fn encode_amount(amount: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(amount).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

fn decode_amount(row: &PgRow, column: &str) -> sqlx::Result<u64> {
    let amount: i64 = row.try_get(column)?;

    u64::try_from(amount).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

fn decode_count(row: &PgRow, column: &str) -> sqlx::Result<u32> {
    let count: i32 = row.try_get(column)?;

    u32::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for ProductSnapshot {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("id")?),
            name: row.try_get("name")?,
            price: decode_amount(row, "price")?,
            stock: decode_count(row, "stock")?,
            is_available: row.try_get("is_available")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for CheckoutRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CheckoutUuid::from_uuid(row.try_get("id")?),
            customer: CustomerUuid::from_uuid(row.try_get("customer_id")?),
            paid: decode_amount(row, "paid")?,
            change: decode_amount(row, "change")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for HistoryRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            checkout: CheckoutRecord {
                uuid: CheckoutUuid::from_uuid(row.try_get("checkout_id")?),
                customer: CustomerUuid::from_uuid(row.try_get("customer_id")?),
                paid: decode_amount(row, "paid")?,
                change: decode_amount(row, "change")?,
                created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            },
            item: PurchasedItem {
                product: ProductUuid::from_uuid(row.try_get("product_id")?),
                quantity: decode_count(row, "quantity")?,
            },
        })
    }
}
