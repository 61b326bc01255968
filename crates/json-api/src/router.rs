//! App Router

use salvo::Router;

use crate::{carts, checkout, products};

/// Routes under `/api`.
pub(crate) fn app_router() -> Router {
    Router::with_path("api")
        .push(Router::with_path("products").get(products::index::handler))
        .push(
            Router::with_path("cart")
                .get(carts::get::handler)
                .post(carts::items::create::handler)
                .push(Router::with_path("{id}").delete(carts::items::delete::handler)),
        )
        .push(Router::with_path("checkout").post(checkout::create::handler))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;
    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;

    use shopfront_app::{
        context::AppContext,
        domain::products::{
            MockProductsService, ProductsServiceError,
            models::{Product, ProductId},
        },
    };

    use crate::{errors, state::State};

    use super::*;

    fn catalog() -> MockProductsService {
        let mut products = MockProductsService::new();

        products.expect_get_product().returning(|id| {
            if id == ProductId::new(1) {
                Ok(Product {
                    id,
                    name: "Top".to_string(),
                    price: Decimal::from(1000),
                })
            } else {
                Err(ProductsServiceError::NotFound)
            }
        });

        products.expect_list_products().never();

        products
    }

    fn service() -> Service {
        let app = AppContext::new(Arc::new(catalog()));

        Service::new(
            Router::new()
                .hoop(inject(State::from_app_context(app)))
                .push(app_router()),
        )
        .catcher(errors::catcher())
    }

    async fn add(service: &Service, product_id: i64, qty: i64) -> Result<Value, salvo::Error> {
        let mut res = TestClient::post("http://example.com/api/cart")
            .json(&json!({ "productId": product_id, "qty": qty }))
            .send(service)
            .await;

        res.take_json().await
    }

    #[tokio::test]
    async fn add_merge_checkout_then_empty_cart() -> TestResult {
        let service = service();

        let first = add(&service, 1, 2).await?;

        assert_eq!(
            first["cart"],
            json!([{ "id": 1, "name": "Top", "price": 1000, "qty": 2 }])
        );

        let second = add(&service, 1, 3).await?;

        assert_eq!(second["message"], "Item added/updated successfully");
        assert_eq!(
            second["cart"],
            json!([{ "id": 1, "name": "Top", "price": 1000, "qty": 5 }])
        );

        let cart: Value = TestClient::get("http://example.com/api/cart")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(cart["total"], "5000.00");

        let receipt: Value = TestClient::post("http://example.com/api/checkout")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(receipt["total"], "5000.00");
        assert_eq!(
            receipt["items"],
            json!([{ "name": "Top", "qty": 5, "price": 1000 }])
        );
        assert!(
            receipt["orderId"]
                .as_str()
                .is_some_and(|id| id.starts_with("ORDER-")),
            "expected ORDER- prefix, got {}",
            receipt["orderId"]
        );

        let cart: Value = TestClient::get("http://example.com/api/cart")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(cart, json!({ "items": [], "total": "0.00" }));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_product_leaves_cart_untouched() -> TestResult {
        let service = service();

        add(&service, 1, 1).await?;

        let res = TestClient::post("http://example.com/api/cart")
            .json(&json!({ "productId": 99, "qty": 1 }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let res = TestClient::delete("http://example.com/api/cart/99")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let cart: Value = TestClient::get("http://example.com/api/cart")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(cart["total"], "1000.00");

        Ok(())
    }

    #[tokio::test]
    async fn removing_last_item_returns_empty_cart_array() -> TestResult {
        let service = service();

        add(&service, 1, 1).await?;

        let body: Value = TestClient::delete("http://example.com/api/cart/1")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(
            body,
            json!({ "message": "Item removed successfully", "cart": [] })
        );

        Ok(())
    }

    #[tokio::test]
    async fn bad_input_gets_json_errors() -> TestResult {
        let service = service();

        let mut res = TestClient::post("http://example.com/api/cart")
            .raw_json("not json")
            .send(&service)
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body["message"], "Request body must be valid JSON.");

        let mut res = TestClient::delete("http://example.com/api/cart/abc")
            .send(&service)
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body["message"], "Item not found in cart.");

        let mut res = TestClient::get("http://example.com/api/nowhere")
            .send(&service)
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(body["message"].is_string(), "expected JSON message, got {body}");

        Ok(())
    }

    #[tokio::test]
    async fn checkout_on_empty_cart_is_rejected() -> TestResult {
        let mut res = TestClient::post("http://example.com/api/checkout")
            .send(&service())
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body["message"], "Cart is empty. Cannot checkout.");

        Ok(())
    }
}
