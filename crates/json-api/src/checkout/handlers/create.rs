//! Create Checkout Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use shopfront_app::domain::carts::models::{Receipt, ReceiptItem, format_amount};

use crate::{carts::into_api_error, errors::ApiError, extensions::*, state::State};

/// Receipt Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReceiptResponse {
    /// Unique order identifier, `ORDER-` followed by digits
    pub order_id: String,

    /// Order total with two decimal places
    pub total: String,

    /// When the order was placed, UTC with millisecond precision
    pub timestamp: String,

    /// Purchased lines
    pub items: Vec<ReceiptItemResponse>,
}

impl From<Receipt> for ReceiptResponse {
    fn from(receipt: Receipt) -> Self {
        Self {
            order_id: receipt.order_id,
            total: format_amount(receipt.total),
            timestamp: format!("{:.3}", receipt.timestamp),
            items: receipt
                .items
                .into_iter()
                .map(ReceiptItemResponse::from)
                .collect(),
        }
    }
}

/// Receipt Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReceiptItemResponse {
    pub name: String,
    pub qty: u32,
    #[salvo(schema(value_type = f64))]
    pub price: Number,
}

impl From<ReceiptItem> for ReceiptItemResponse {
    fn from(item: ReceiptItem) -> Self {
        Self {
            name: item.name,
            qty: item.qty,
            price: item.price.to_json_number(),
        }
    }
}

/// Create Checkout Handler
///
/// Empties the cart and returns a receipt for its contents.
#[endpoint(
    tags("checkout"),
    summary = "Checkout",
    responses(
        (status_code = StatusCode::OK, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Cart is empty"),
    ),
)]
#[tracing::instrument(name = "checkout.create", skip(depot), err)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ReceiptResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let receipt = state.carts.checkout().await.map_err(into_api_error)?;

    Ok(Json(receipt.into()))
}
