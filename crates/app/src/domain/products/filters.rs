//! Product listing filters.
//!
//! Raw query values are resolved into a closed set of [`ProductFilter`]s. Each filter
//! renders its own predicate with bound parameters, and sort directions only ever
//! render as the static keywords of [`SortDirection`].

use serde::Deserialize;
use sqlx::{Postgres, QueryBuilder};

use crate::{
    domain::products::{data::ProductCategory, records::ProductUuid},
    listing::{Page, SortDirection, escape_like, parse_flag, parse_text},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");

/// Raw listing parameters, exactly as received in a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductListParams {
    pub id: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub name: Option<String>,
    pub is_available: Option<String>,
    pub category: Option<String>,
    pub sku: Option<String>,
    pub price: Option<String>,
    pub in_stock: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    Id(ProductUuid),
    NameContains(String),
    IsAvailable(bool),
    Category(ProductCategory),
    Sku(String),
    InStock(bool),
}

impl ProductFilter {
    fn push_sql(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Self::Id(uuid) => {
                builder.push(" AND id = ").push_bind(uuid.into_uuid());
            }
            Self::NameContains(name) => {
                builder
                    .push(" AND name ILIKE ")
                    .push_bind(format!("%{}%", escape_like(name)));
            }
            Self::IsAvailable(is_available) => {
                builder.push(" AND is_available = ").push_bind(*is_available);
            }
            Self::Category(category) => {
                builder.push(" AND category = ").push_bind(category.as_str());
            }
            Self::Sku(sku) => {
                builder.push(" AND sku = ").push_bind(sku.clone());
            }
            Self::InStock(true) => {
                builder.push(" AND stock > 0");
            }
            Self::InStock(false) => {
                builder.push(" AND stock = 0");
            }
        }
    }
}

/// A resolved product listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub filters: Vec<ProductFilter>,
    pub price: Option<SortDirection>,
    pub created_at: SortDirection,
    pub page: Page,
}

impl ProductQuery {
    /// Staff listing: every filter is honoured.
    #[must_use]
    pub fn for_staff(params: &ProductListParams) -> Self {
        let mut filters = Vec::new();

        if let Some(uuid) = params.id.as_deref().and_then(ProductUuid::parse) {
            filters.push(ProductFilter::Id(uuid));
        }

        if let Some(is_available) = parse_flag(params.is_available.as_deref()) {
            filters.push(ProductFilter::IsAvailable(is_available));
        }

        let mut query = Self::shared(params, filters);

        if let Some(direction) = SortDirection::parse(params.created_at.as_deref()) {
            query.created_at = direction;
        }

        query
    }

    /// Public listing: only available products, newest first.
    #[must_use]
    pub fn for_customers(params: &ProductListParams) -> Self {
        Self::shared(params, vec![ProductFilter::IsAvailable(true)])
    }

    fn shared(params: &ProductListParams, mut filters: Vec<ProductFilter>) -> Self {
        if let Some(name) = parse_text(params.name.as_deref()) {
            filters.push(ProductFilter::NameContains(name));
        }

        if let Some(category) = params
            .category
            .as_deref()
            .and_then(|raw| raw.trim().parse::<ProductCategory>().ok())
        {
            filters.push(ProductFilter::Category(category));
        }

        if let Some(sku) = parse_text(params.sku.as_deref()) {
            filters.push(ProductFilter::Sku(sku));
        }

        if let Some(in_stock) = parse_flag(params.in_stock.as_deref()) {
            filters.push(ProductFilter::InStock(in_stock));
        }

        Self {
            filters,
            price: SortDirection::parse(params.price.as_deref()),
            created_at: SortDirection::Desc,
            page: Page::parse(params.limit.as_deref(), params.offset.as_deref()),
        }
    }

    pub(crate) fn to_sql(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(LIST_PRODUCTS_SQL);

        for filter in &self.filters {
            filter.push_sql(&mut builder);
        }

        builder.push(" ORDER BY ");

        if let Some(price) = self.price {
            builder.push("price ").push(price.as_sql()).push(", ");
        }

        builder
            .push("created_at ")
            .push(self.created_at.as_sql())
            .push(", id DESC");

        self.page.push_sql(&mut builder);

        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ProductListParams {
        ProductListParams::default()
    }

    fn normalised(builder: &QueryBuilder<'_, Postgres>) -> String {
        builder.sql().split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn staff_defaults_to_newest_first_with_default_page() {
        let query = ProductQuery::for_staff(&params());

        assert!(query.filters.is_empty());
        assert_eq!(query.price, None);
        assert_eq!(query.created_at, SortDirection::Desc);
        assert_eq!(query.page, Page::default());
        assert!(normalised(&query.to_sql()).ends_with(
            "WHERE TRUE ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2"
        ));
    }

    #[test]
    fn staff_filters_render_in_order_with_bound_values() {
        let uuid = ProductUuid::new();

        let query = ProductQuery::for_staff(&ProductListParams {
            id: Some(uuid.to_string()),
            name: Some("shirt".to_string()),
            is_available: Some("true".to_string()),
            category: Some("Clothing".to_string()),
            sku: Some("SKU-1".to_string()),
            in_stock: Some("false".to_string()),
            price: Some("asc".to_string()),
            created_at: Some("asc".to_string()),
            ..params()
        });

        assert_eq!(
            query.filters,
            vec![
                ProductFilter::Id(uuid),
                ProductFilter::IsAvailable(true),
                ProductFilter::NameContains("shirt".to_string()),
                ProductFilter::Category(ProductCategory::Clothing),
                ProductFilter::Sku("SKU-1".to_string()),
                ProductFilter::InStock(false),
            ]
        );
        assert!(normalised(&query.to_sql()).ends_with(
            "WHERE TRUE AND id = $1 AND is_available = $2 AND name ILIKE $3 \
             AND category = $4 AND sku = $5 AND stock = 0 \
             ORDER BY price ASC, created_at ASC, id DESC LIMIT $6 OFFSET $7"
        ));
    }

    #[test]
    fn malformed_values_are_ignored() {
        let query = ProductQuery::for_staff(&ProductListParams {
            id: Some("not-a-uuid".to_string()),
            is_available: Some("maybe".to_string()),
            category: Some("Food".to_string()),
            in_stock: Some("1".to_string()),
            price: Some("cheapest".to_string()),
            created_at: Some("oldest".to_string()),
            limit: Some("many".to_string()),
            offset: Some("-1".to_string()),
            ..params()
        });

        assert_eq!(
            query,
            ProductQuery {
                filters: vec![],
                price: None,
                created_at: SortDirection::Desc,
                page: Page::default(),
            }
        );
    }

    #[test]
    fn customer_listing_is_limited_to_available_products() {
        let query = ProductQuery::for_customers(&ProductListParams {
            id: Some(ProductUuid::new().to_string()),
            is_available: Some("false".to_string()),
            created_at: Some("asc".to_string()),
            price: Some("desc".to_string()),
            ..params()
        });

        assert_eq!(query.filters, vec![ProductFilter::IsAvailable(true)]);
        assert_eq!(query.created_at, SortDirection::Desc);
        assert_eq!(query.price, Some(SortDirection::Desc));
    }
}
