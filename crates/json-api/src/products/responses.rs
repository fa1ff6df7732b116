//! Product response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use eniqilo_app::domain::products::records::ProductRecord;

/// Product as seen by staff.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub image_url: String,
    pub stock: u32,
    pub notes: String,
    pub price: u64,
    pub location: String,
    pub is_available: bool,
    pub created_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        let details = product.details;

        Self {
            id: product.uuid.to_string(),
            name: details.name,
            sku: details.sku,
            category: details.category.to_string(),
            image_url: details.image_url,
            stock: details.stock,
            notes: details.notes,
            price: details.price,
            location: details.location,
            is_available: details.is_available,
            created_at: product.created_at.to_string(),
        }
    }
}

/// Product as seen by customers; availability is implied.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CustomerProductResponse {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub image_url: String,
    pub stock: u32,
    pub price: u64,
    pub location: String,
    pub created_at: String,
}

impl From<ProductRecord> for CustomerProductResponse {
    fn from(product: ProductRecord) -> Self {
        let details = product.details;

        Self {
            id: product.uuid.to_string(),
            name: details.name,
            sku: details.sku,
            category: details.category.to_string(),
            image_url: details.image_url,
            stock: details.stock,
            price: details.price,
            location: details.location,
            created_at: product.created_at.to_string(),
        }
    }
}

/// Product Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductCreatedResponse {
    pub id: String,
    pub created_at: String,
}

/// Product Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductUpdatedResponse {
    pub id: String,
    pub updated_at: String,
}

/// Product Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductDeletedResponse {
    pub id: String,
    pub deleted_at: String,
}
