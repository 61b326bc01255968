//! Test helpers.

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use shopfront_app::domain::{
    carts::{MockCartsService, models::CartItem},
    products::{MockProductsService, models::ProductId},
};

use crate::{errors, state::State};

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();

    products
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_add_item().never();
    carts.expect_remove_item().never();
    carts.expect_get_cart().never();
    carts.expect_checkout().never();

    carts
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    let state = State {
        products: Arc::new(products),
        carts: Arc::new(strict_carts_mock()),
    };

    Service::new(Router::new().hoop(inject(Arc::new(state))).push(route))
        .catcher(errors::catcher())
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    let state = State {
        products: Arc::new(strict_products_mock()),
        carts: Arc::new(carts),
    };

    Service::new(Router::new().hoop(inject(Arc::new(state))).push(route))
        .catcher(errors::catcher())
}

pub(crate) fn make_cart_item(id: i64, name: &str, price: Decimal, qty: u32) -> CartItem {
    CartItem {
        product: ProductId::new(id),
        name: name.to_string(),
        price,
        qty,
    }
}
