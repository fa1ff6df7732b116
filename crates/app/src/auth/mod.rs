//! Staff accounts and authentication

mod errors;
mod models;
mod password;
mod repository;
mod service;
mod token;

pub use errors::*;
pub use models::*;
pub use password::{Password, PasswordError};
pub use service::*;
pub use token::*;
