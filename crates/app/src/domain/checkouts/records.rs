//! Checkout Records

use jiff::Timestamp;

use crate::{
    domain::{customers::records::CustomerUuid, products::records::ProductUuid},
    uuids::TypedUuid,
};

/// Checkout UUID
pub type CheckoutUuid = TypedUuid<CheckoutRecord>;

/// Line Item UUID
pub type LineItemUuid = TypedUuid<PurchasedItem>;

/// A proposed sale. Identifiers are kept as received; resolving them is part of
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCheckout {
    pub uuid: CheckoutUuid,
    pub customer_id: String,
    pub line_items: Vec<NewLineItem>,
    pub paid: u64,
    pub change: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLineItem {
    pub product_id: String,
    pub quantity: u32,
}

/// Committed checkout header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRecord {
    pub uuid: CheckoutUuid,
    pub customer: CustomerUuid,
    pub paid: u64,
    pub change: u64,
    pub created_at: Timestamp,
}

/// One product line of a committed checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchasedItem {
    pub product: ProductUuid,
    pub quantity: u32,
}

/// A checkout with its line items in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutHistoryEntry {
    pub checkout: CheckoutRecord,
    pub items: Vec<PurchasedItem>,
}
