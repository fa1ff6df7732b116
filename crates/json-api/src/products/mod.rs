//! Products

mod handlers;
mod requests;
mod responses;

pub(crate) use handlers::*;

use eniqilo_app::domain::products::{ProductsServiceError, records::ProductUuid};

use crate::errors::ApiError;

/// Malformed ids cannot name an existing product.
fn parse_product_id(raw: &str) -> Result<ProductUuid, ApiError> {
    ProductUuid::parse(raw).ok_or_else(|| ProductsServiceError::NotFound.into())
}
