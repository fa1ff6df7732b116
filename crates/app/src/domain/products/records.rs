//! Product Records

use jiff::Timestamp;

use crate::{domain::products::data::ProductDetails, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub details: ProductDetails,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
