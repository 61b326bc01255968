//! Errors

use tracing::error;

use shopfront_app::domain::carts::CartsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: CartsServiceError) -> ApiError {
    match error {
        CartsServiceError::MissingRequiredData => {
            ApiError::bad_request("productId and qty are required.")
        }
        CartsServiceError::InvalidQuantity => {
            ApiError::bad_request("qty must be a positive integer.")
        }
        CartsServiceError::EmptyCart => ApiError::bad_request("Cart is empty. Cannot checkout."),
        CartsServiceError::ProductNotFound => ApiError::not_found("Product not found."),
        CartsServiceError::ItemNotFound => ApiError::not_found("Item not found in cart."),
        CartsServiceError::Products(source) => {
            error!("failed to load product: {source}");

            ApiError::internal("failed to load product")
        }
    }
}
