//! Checkouts
//!
//! A checkout sells one or more products to a registered customer. Validation runs
//! against product rows locked inside the same transaction that writes the sale, so
//! what was checked is exactly what gets decremented.

pub mod errors;
pub mod history;
pub mod records;
mod repository;
pub mod service;
pub mod settlement;

pub use errors::CheckoutsServiceError;
pub use service::*;
