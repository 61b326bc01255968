//! Get Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{carts::models::CartResponse, errors::ApiError, extensions::*, state::State};

/// Get Cart Handler
///
/// Returns the cart with its formatted total.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Current cart"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state.carts.get_cart().await;

    Ok(Json(cart.into()))
}
