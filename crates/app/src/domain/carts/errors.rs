//! Carts service errors.

use thiserror::Error;

use crate::domain::products::ProductsServiceError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("productId and qty are required")]
    MissingRequiredData,

    #[error("qty must be a positive integer")]
    InvalidQuantity,

    #[error("product not found")]
    ProductNotFound,

    #[error("item not found in cart")]
    ItemNotFound,

    #[error("cart is empty")]
    EmptyCart,

    #[error("failed to load product")]
    Products(#[source] ProductsServiceError),
}

impl From<ProductsServiceError> for CartsServiceError {
    fn from(error: ProductsServiceError) -> Self {
        match error {
            ProductsServiceError::NotFound => Self::ProductNotFound,
            ProductsServiceError::Sql(_) => Self::Products(error),
        }
    }
}
