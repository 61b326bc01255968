//! Carts

mod errors;
mod handlers;
pub(crate) mod items;
mod models;

pub(crate) use errors::into_api_error;
pub(crate) use handlers::*;
