//! Store Domain Concerns

pub mod checkouts;
pub mod customers;
pub mod products;
