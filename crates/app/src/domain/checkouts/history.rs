//! Checkout history.
//!
//! Paging applies to checkouts, not to line items: the page of headers is selected
//! first and then joined to its items, one row per item. Rows are folded back into
//! one entry per checkout.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use sqlx::{Postgres, QueryBuilder};

use crate::{
    domain::{
        checkouts::records::{CheckoutHistoryEntry, CheckoutRecord, CheckoutUuid, PurchasedItem},
        customers::records::CustomerUuid,
    },
    listing::{Page, SortDirection},
};

const HISTORY_PAGE_SQL: &str = include_str!("sql/history_page.sql");
const HISTORY_ROWS_SQL: &str = include_str!("sql/history_rows.sql");

/// Raw history parameters, exactly as received in a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryParams {
    pub customer_id: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryQuery {
    pub customer: Option<CustomerUuid>,
    pub created_at: SortDirection,
    pub page: Page,
}

impl From<&HistoryParams> for HistoryQuery {
    fn from(params: &HistoryParams) -> Self {
        Self {
            customer: params.customer_id.as_deref().and_then(CustomerUuid::parse),
            created_at: SortDirection::parse(params.created_at.as_deref())
                .unwrap_or(SortDirection::Desc),
            page: Page::parse(params.limit.as_deref(), params.offset.as_deref()),
        }
    }
}

impl HistoryQuery {
    pub(crate) fn to_sql(self) -> QueryBuilder<'static, Postgres> {
        let direction = self.created_at.as_sql();
        let mut builder = QueryBuilder::new("WITH page AS (\n");

        builder.push(HISTORY_PAGE_SQL);

        if let Some(customer) = self.customer {
            builder
                .push(" AND customer_id = ")
                .push_bind(customer.into_uuid());
        }

        builder
            .push(" ORDER BY created_at ")
            .push(direction)
            .push(", id ")
            .push(direction);

        self.page.push_sql(&mut builder);

        builder
            .push("\n)\n")
            .push(HISTORY_ROWS_SQL)
            .push(" ORDER BY page.created_at ")
            .push(direction)
            .push(", page.id ")
            .push(direction)
            .push(", items.position ASC");

        builder
    }
}

/// One checkout line joined with its header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub checkout: CheckoutRecord,
    pub item: PurchasedItem,
}

/// Group flat rows by checkout, keeping the order in which checkouts first appear.
#[must_use]
pub fn group_rows(rows: Vec<HistoryRow>) -> Vec<CheckoutHistoryEntry> {
    let mut positions: FxHashMap<CheckoutUuid, usize> = FxHashMap::default();
    let mut entries: Vec<CheckoutHistoryEntry> = Vec::new();

    for HistoryRow { checkout, item } in rows {
        if let Some(&index) = positions.get(&checkout.uuid) {
            entries[index].items.push(item);
            continue;
        }

        positions.insert(checkout.uuid, entries.len());
        entries.push(CheckoutHistoryEntry {
            checkout,
            items: vec![item],
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::domain::products::records::ProductUuid;

    use super::*;

    fn header(paid: u64) -> CheckoutRecord {
        CheckoutRecord {
            uuid: CheckoutUuid::new(),
            customer: CustomerUuid::new(),
            paid,
            change: 0,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn row(checkout: &CheckoutRecord, quantity: u32) -> HistoryRow {
        HistoryRow {
            checkout: checkout.clone(),
            item: PurchasedItem {
                product: ProductUuid::new(),
                quantity,
            },
        }
    }

    #[test]
    fn rows_are_grouped_in_first_seen_order() {
        let newer = header(30);
        let older = header(10);

        let rows = vec![row(&newer, 1), row(&newer, 2), row(&older, 3)];
        let expected_items: Vec<Vec<u32>> = vec![vec![1, 2], vec![3]];

        let entries = group_rows(rows);

        assert_eq!(
            entries.iter().map(|e| e.checkout.uuid).collect::<Vec<_>>(),
            vec![newer.uuid, older.uuid]
        );
        assert_eq!(
            entries
                .iter()
                .map(|e| e.items.iter().map(|i| i.quantity).collect::<Vec<_>>())
                .collect::<Vec<_>>(),
            expected_items
        );
    }

    #[test]
    fn no_rows_means_no_entries() {
        assert!(group_rows(Vec::new()).is_empty());
    }

    #[test]
    fn malformed_params_fall_back_to_defaults() {
        let query = HistoryQuery::from(&HistoryParams {
            customer_id: Some("nope".to_string()),
            limit: Some("-1".to_string()),
            offset: Some("x".to_string()),
            created_at: Some("newest".to_string()),
        });

        assert_eq!(
            query,
            HistoryQuery {
                customer: None,
                created_at: SortDirection::Desc,
                page: Page::default(),
            }
        );
    }

    #[test]
    fn customer_filter_pages_headers_before_joining_items() {
        let query = HistoryQuery::from(&HistoryParams {
            customer_id: Some(CustomerUuid::new().to_string()),
            created_at: Some("ASC".to_string()),
            ..HistoryParams::default()
        });

        let sql = query
            .to_sql()
            .sql()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        assert!(sql.starts_with("WITH page AS ( SELECT"));
        assert!(sql.contains(
            "WHERE TRUE AND customer_id = $1 ORDER BY created_at ASC, id ASC LIMIT $2 OFFSET $3 )"
        ));
        assert!(sql.ends_with(
            "ORDER BY page.created_at ASC, page.id ASC, items.position ASC"
        ));
    }
}
