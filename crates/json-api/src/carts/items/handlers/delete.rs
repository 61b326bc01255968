//! Delete Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use shopfront_app::domain::{carts::CartsServiceError, products::models::ProductId};

use crate::{
    carts::{into_api_error, models::CartUpdatedResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Delete Cart Item Handler
///
/// An id that is not an integer can never be in the cart, so it reports the item as missing.
#[endpoint(
    tags("carts"),
    summary = "Remove Item from Cart",
    responses(
        (status_code = StatusCode::OK, description = "Item removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not in cart"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.delete",
    skip(id, depot),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartUpdatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let id = id
        .trim()
        .parse::<i64>()
        .map_err(|_invalid| into_api_error(CartsServiceError::ItemNotFound))?;

    tracing::Span::current().record("product_id", id);

    let cart = state
        .carts
        .remove_item(ProductId::new(id))
        .await
        .map_err(into_api_error)?;

    Ok(Json(CartUpdatedResponse::new("Item removed successfully", cart)))
}
