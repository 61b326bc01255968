//! Carts

pub mod data;
pub mod errors;
pub mod models;
mod orders;
pub mod service;

pub use errors::CartsServiceError;
pub use service::*;
