//! Products Data

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::domain::products::records::ProductUuid;

/// Lowest accepted unit price.
pub const MIN_PRICE: u64 = 1;

/// Highest stock level a product may be set to.
pub const MAX_STOCK: u32 = 100_000;

/// Catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductCategory {
    Clothing,
    Accessories,
    Footware,
    Beverages,
}

impl ProductCategory {
    pub const ALL: [Self; 4] = [
        Self::Clothing,
        Self::Accessories,
        Self::Footware,
        Self::Beverages,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clothing => "Clothing",
            Self::Accessories => "Accessories",
            Self::Footware => "Footware",
            Self::Beverages => "Beverages",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown product category {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for ProductCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Clothing" => Ok(Self::Clothing),
            "Accessories" => Ok(Self::Accessories),
            // Both spellings are in circulation; the stored value is "Footware".
            "Footware" | "Footwear" => Ok(Self::Footware),
            "Beverages" => Ok(Self::Beverages),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Editable product attributes, shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    pub name: String,
    pub sku: String,
    pub category: ProductCategory,
    pub image_url: String,
    pub notes: String,
    pub price: u64,
    pub stock: u32,
    pub location: String,
    pub is_available: bool,
}

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub details: ProductDetails,
}
