//! Cart Response Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use shopfront_app::domain::carts::models::{Cart, CartItem, format_amount};

use crate::extensions::*;

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Line items in first-added order
    pub items: Vec<CartItemResponse>,

    /// Sum of price times quantity, with two decimal places
    pub total: String,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let total = format_amount(cart.total());

        Self {
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            total,
        }
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// The product id
    pub id: i64,

    /// The product name
    pub name: String,

    /// The unit price
    #[salvo(schema(value_type = f64))]
    pub price: Number,

    /// Units of the product in the cart
    pub qty: u32,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.product.into_inner(),
            name: item.name,
            price: item.price.to_json_number(),
            qty: item.qty,
        }
    }
}

/// Cart Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartUpdatedResponse {
    /// What changed
    pub message: String,

    /// Every line in the cart after the change
    pub cart: Vec<CartItemResponse>,
}

impl CartUpdatedResponse {
    pub(crate) fn new(message: &str, cart: Cart) -> Self {
        Self {
            message: message.to_string(),
            cart: cart.items.into_iter().map(CartItemResponse::from).collect(),
        }
    }
}
