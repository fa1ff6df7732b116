//! Product Handlers

pub(crate) mod create;
pub(crate) mod customer_index;
pub(crate) mod delete;
pub(crate) mod index;
pub(crate) mod update;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use serde_json::{Value, json};

    use eniqilo_app::domain::products::{
        data::{ProductCategory, ProductDetails},
        records::{ProductRecord, ProductUuid},
    };

    pub(super) fn make_details() -> ProductDetails {
        ProductDetails {
            name: "Linen Shirt".to_string(),
            sku: "LS-001".to_string(),
            category: ProductCategory::Clothing,
            image_url: "https://cdn.example.com/linen.png".to_string(),
            notes: "Summer collection".to_string(),
            price: 150_000,
            stock: 12,
            location: "Rack A3".to_string(),
            is_available: true,
        }
    }

    pub(super) fn make_product(uuid: ProductUuid) -> ProductRecord {
        ProductRecord {
            uuid,
            details: make_details(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    pub(super) fn product_body() -> Value {
        json!({
            "name": "Linen Shirt",
            "sku": "LS-001",
            "category": "Clothing",
            "imageUrl": "https://cdn.example.com/linen.png",
            "notes": "Summer collection",
            "price": 150_000,
            "stock": 12,
            "location": "Rack A3",
            "isAvailable": true,
        })
    }
}
