//! Create Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use shopfront_app::domain::carts::{CartsServiceError, data::NewCartItem};

use crate::{
    carts::{into_api_error, models::CartUpdatedResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddCartItemRequest {
    /// The product to add
    pub product_id: i64,

    /// Units to add
    pub qty: i64,
}

/// A body field after `null`, `false`, `0` and `""` have been folded into `Missing`.
#[derive(Debug, PartialEq)]
enum Field {
    Missing,
    Integer(i64),
    Text(String),
    Other,
}

impl Field {
    fn read(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null | Value::Bool(false)) => Self::Missing,
            Some(Value::String(text)) if text.is_empty() => Self::Missing,
            Some(Value::String(text)) => Self::Text(text),
            Some(Value::Number(number)) => match number.as_i64() {
                Some(0) => Self::Missing,
                Some(integer) => Self::Integer(integer),
                None if number.as_f64().is_some_and(|value| value == 0.0) => Self::Missing,
                None => Self::Other,
            },
            Some(_) => Self::Other,
        }
    }
}

/// Reads `productId` and `qty` out of a request body.
///
/// Non-object bodies carry neither field. Product ids may arrive as numeric strings.
fn read_new_item(body: Value) -> Result<NewCartItem, CartsServiceError> {
    let mut fields = match body {
        Value::Object(fields) => fields,
        _ => Map::new(),
    };

    let product = Field::read(fields.remove("productId"));
    let qty = Field::read(fields.remove("qty"));

    if product == Field::Missing || qty == Field::Missing {
        return Err(CartsServiceError::MissingRequiredData);
    }

    let Field::Integer(qty) = qty else {
        return Err(CartsServiceError::InvalidQuantity);
    };

    let product = match product {
        Field::Integer(id) => id,
        Field::Text(text) => text
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|id| *id != 0)
            .ok_or(CartsServiceError::ProductNotFound)?,
        Field::Missing | Field::Other => return Err(CartsServiceError::ProductNotFound),
    };

    NewCartItem::new(Some(product), Some(qty))
}

fn parse_body(payload: &[u8]) -> Result<Value, serde_json::Error> {
    if payload.trim_ascii().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_slice(payload)
}

/// Create Cart Item Handler
///
/// Adds a product to the cart, or increases its quantity when already present.
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    request_body = AddCartItemRequest,
    responses(
        (status_code = StatusCode::OK, description = "Item added or updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.create",
    skip(req, depot),
    fields(
        product_id = tracing::field::Empty,
        qty = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CartUpdatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let payload = req.payload().await.map_err(|source| {
        debug!("failed to read request body: {source}");

        ApiError::bad_request("Request body could not be read.")
    })?;

    let body = parse_body(payload).map_err(|source| {
        debug!("rejected malformed JSON body: {source}");

        ApiError::bad_request("Request body must be valid JSON.")
    })?;

    let item = read_new_item(body).map_err(into_api_error)?;

    let span = tracing::Span::current();

    span.record("product_id", item.product.into_inner());
    span.record("qty", item.qty);

    let cart = state.carts.add_item(item).await.map_err(into_api_error)?;

    Ok(Json(CartUpdatedResponse::new(
        "Item added/updated successfully",
        cart,
    )))
}
