//! Customer listing filters.

use serde::Deserialize;
use sqlx::{Postgres, QueryBuilder};

use crate::listing::{escape_like, parse_text};

const LIST_CUSTOMERS_SQL: &str = include_str!("sql/list_customers.sql");

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerListParams {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerFilter {
    NameContains(String),
    PhoneNumberPrefix(String),
}

impl CustomerFilter {
    fn push_sql(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Self::NameContains(name) => {
                builder
                    .push(" AND name ILIKE ")
                    .push_bind(format!("%{}%", escape_like(name)));
            }
            Self::PhoneNumberPrefix(prefix) => {
                builder
                    .push(" AND phone_number ILIKE ")
                    .push_bind(format!("{}%", escape_like(prefix)));
            }
        }
    }
}

/// Resolved customer listing, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerQuery {
    pub filters: Vec<CustomerFilter>,
}

impl From<&CustomerListParams> for CustomerQuery {
    fn from(params: &CustomerListParams) -> Self {
        let mut filters = Vec::new();

        if let Some(name) = parse_text(params.name.as_deref()) {
            filters.push(CustomerFilter::NameContains(name));
        }

        // A `+` in a query string decodes to a space, so a prefix that lost its leading
        // plus is matched as if it still had one.
        if let Some(phone_number) = parse_text(params.phone_number.as_deref()) {
            let phone_number = if phone_number.starts_with('+') {
                phone_number
            } else {
                format!("+{phone_number}")
            };

            filters.push(CustomerFilter::PhoneNumberPrefix(phone_number));
        }

        Self { filters }
    }
}

impl CustomerQuery {
    pub(crate) fn to_sql(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(LIST_CUSTOMERS_SQL);

        for filter in &self.filters {
            filter.push_sql(&mut builder);
        }

        builder.push(" ORDER BY created_at DESC, id DESC");

        builder
    }
}
