//! Product request payloads.

use std::ops::RangeInclusive;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use eniqilo_app::{
    domain::products::data::{MAX_STOCK, ProductCategory, ProductDetails},
    validation::Violations,
};

const NAME_LENGTH: RangeInclusive<usize> = 1..=30;
const SKU_LENGTH: RangeInclusive<usize> = 1..=30;
const NOTES_LENGTH: RangeInclusive<usize> = 1..=200;
const LOCATION_LENGTH: RangeInclusive<usize> = 1..=200;
const PRICE_RANGE: RangeInclusive<i64> = 1..=i64::MAX;

/// Product attributes, used by both create and update.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ProductRequest {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub notes: Option<String>,
    pub price: Option<i64>,
    pub stock: Option<i64>,
    pub location: Option<String>,
    pub is_available: Option<bool>,
}

impl ProductRequest {
    pub(crate) fn validate(self) -> Result<ProductDetails, Violations> {
        let mut violations = Violations::new();

        let name = violations.text("name", self.name, NAME_LENGTH);
        let sku = violations.text("sku", self.sku, SKU_LENGTH);
        let category = category(&mut violations, self.category);
        let image_url = violations.url("imageUrl", self.image_url);
        let notes = violations.text("notes", self.notes, NOTES_LENGTH);

        let price = violations
            .integer("price", self.price, PRICE_RANGE)
            .and_then(|price| u64::try_from(price).ok());

        let stock = violations
            .integer("stock", self.stock, 0..=i64::from(MAX_STOCK))
            .and_then(|stock| u32::try_from(stock).ok());

        let location = violations.text("location", self.location, LOCATION_LENGTH);
        let is_available = violations.require("isAvailable", self.is_available);

        let (
            Some(name),
            Some(sku),
            Some(category),
            Some(image_url),
            Some(notes),
            Some(price),
            Some(stock),
            Some(location),
            Some(is_available),
        ) = (
            name,
            sku,
            category,
            image_url,
            notes,
            price,
            stock,
            location,
            is_available,
        )
        else {
            return Err(violations);
        };

        Ok(ProductDetails {
            name,
            sku,
            category,
            image_url,
            notes,
            price,
            stock,
            location,
            is_available,
        })
    }
}

fn category(violations: &mut Violations, raw: Option<String>) -> Option<ProductCategory> {
    match violations.require("category", raw)?.parse::<ProductCategory>() {
        Ok(category) => Some(category),
        Err(_unknown) => {
            let names: Vec<&str> = ProductCategory::ALL.iter().map(|c| c.as_str()).collect();

            violations.push("category", format!("must be one of {}", names.join(", ")));

            None
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{from_value, json};
    use testresult::TestResult;

    use super::*;

    fn valid() -> serde_json::Value {
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

    #[test]
    fn valid_request_becomes_details() -> TestResult {
        let details = from_value::<ProductRequest>(valid())?.validate()?;

        assert_eq!(details.category, ProductCategory::Clothing);
        assert_eq!(details.price, 150_000);
        assert_eq!(details.stock, 12);
        assert!(details.is_available);

        Ok(())
    }

    #[test]
    fn every_field_is_required() -> TestResult {
        let violations = from_value::<ProductRequest>(json!({}))?
            .validate()
            .err()
            .unwrap_or_default();

        assert_eq!(violations.iter().count(), 9);

        Ok(())
    }

    #[test]
    fn out_of_range_values_are_reported_per_field() -> TestResult {
        let mut body = valid();

        body["category"] = json!("Food");
        body["imageUrl"] = json!("not-a-url");
        body["price"] = json!(0);
        body["stock"] = json!(100_001);

        let violations = from_value::<ProductRequest>(body)?
            .validate()
            .err()
            .unwrap_or_default();

        let fields: Vec<&str> = violations.iter().map(|v| v.field).collect();

        assert_eq!(fields, vec!["category", "imageUrl", "price", "stock"]);
        assert_eq!(
            violations.to_string(),
            "category must be one of Clothing, Accessories, Footware, Beverages; \
             imageUrl must be a valid url; price must be at least 1; \
             stock must be between 0 and 100000"
        );

        Ok(())
    }
}
