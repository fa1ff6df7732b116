//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::products::{
    data::{ProductCategory, ProductDetails},
    filters::ProductQuery,
    records::{ProductRecord, ProductUuid},
};

const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        listing: &ProductQuery,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        let mut builder = listing.to_sql();

        builder
            .build_query_as::<ProductRecord>()
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        details: &ProductDetails,
    ) -> Result<ProductRecord, sqlx::Error> {
        let (price, stock) = encode_amounts(details)?;

        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(&details.name)
            .bind(&details.sku)
            .bind(details.category.as_str())
            .bind(&details.image_url)
            .bind(&details.notes)
            .bind(price)
            .bind(stock)
            .bind(&details.location)
            .bind(details.is_available)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        details: &ProductDetails,
    ) -> Result<ProductRecord, sqlx::Error> {
        let (price, stock) = encode_amounts(details)?;

        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(&details.name)
            .bind(&details.sku)
            .bind(details.category.as_str())
            .bind(&details.image_url)
            .bind(&details.notes)
            .bind(price)
            .bind(stock)
            .bind(&details.location)
            .bind(details.is_available)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn encode_amounts(details: &ProductDetails) -> Result<(i64, i32), sqlx::Error> {
    let price = i64::try_from(details.price).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
    let stock = i32::try_from(details.stock).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

    Ok((price, stock))
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let price_i64: i64 = row.try_get("price")?;
        let stock_i32: i32 = row.try_get("stock")?;
        let category: String = row.try_get("category")?;

        let price = u64::try_from(price_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "price".to_string(),
            source: Box::new(e),
        })?;

        let stock = u32::try_from(stock_i32).map_err(|e| sqlx::Error::ColumnDecode {
            index: "stock".to_string(),
            source: Box::new(e),
        })?;

        let category =
            category
                .parse::<ProductCategory>()
                .map_err(|e| sqlx::Error::ColumnDecode {
                    index: "category".to_string(),
                    source: Box::new(e),
                })?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("id")?),
            details: ProductDetails {
                name: row.try_get("name")?,
                sku: row.try_get("sku")?,
                category,
                image_url: row.try_get("image_url")?,
                notes: row.try_get("notes")?,
                price,
                stock,
                location: row.try_get("location")?,
                is_available: row.try_get("is_available")?,
            },
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
