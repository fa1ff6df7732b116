//! Paging and ordering shared by the list endpoints.
//!
//! List parameters arrive as raw query-string values. Anything that does not parse is
//! replaced by its default instead of being rejected.

use sqlx::{Postgres, QueryBuilder};

pub const DEFAULT_LIMIT: u32 = 5;

/// Requested page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Page {
    /// Build a page from raw `limit` and `offset` values.
    #[must_use]
    pub fn parse(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit = limit
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_LIMIT);

        let offset = offset
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(0);

        Self { limit, offset }
    }

    pub(crate) fn push_sql(self, builder: &mut QueryBuilder<'_, Postgres>) {
        builder
            .push(" LIMIT ")
            .push_bind(i64::from(self.limit))
            .push(" OFFSET ")
            .push_bind(i64::from(self.offset));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// `asc` or `desc`, case-insensitively; anything else is `None`.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let raw = raw?.trim();

        if raw.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    pub(crate) const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// `true` or `false`, case-insensitively; anything else is `None`.
#[must_use]
pub fn parse_flag(raw: Option<&str>) -> Option<bool> {
    let raw = raw?.trim();

    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Non-blank filter text.
#[must_use]
pub fn parse_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}

/// Escape `LIKE` metacharacters so user input only ever matches literally.
pub(crate) fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }

        escaped.push(c);
    }

    escaped
}
