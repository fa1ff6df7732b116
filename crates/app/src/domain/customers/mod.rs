//! Customers

pub mod errors;
pub mod filters;
pub mod records;
mod repository;
pub mod service;

pub use errors::CustomersServiceError;
pub use service::*;
