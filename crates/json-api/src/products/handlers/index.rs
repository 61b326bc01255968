//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use shopfront_app::domain::products::models::Product;

use crate::{errors::ApiError, extensions::*, state::State};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The product id
    pub id: i64,

    /// The product name
    pub name: String,

    /// The unit price
    #[salvo(schema(value_type = f64))]
    pub price: Number,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into_inner(),
            name: product.name,
            price: product.price.to_json_number(),
        }
    }
}

/// Product Index Handler
///
/// Returns every product in the catalog.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Catalog products"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .products
        .list_products()
        .await
        .or_500("failed to fetch products")?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopfront_app::domain::products::{
        MockProductsService, ProductsServiceError, models::ProductId,
    };

    use crate::{errors::InternalErrorResponse, test_helpers::products_service};

    use super::*;

    fn make_product(id: i64, name: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Decimal::from(price),
        }
    }

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("api/products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(|| Ok(vec![]));

        repo.expect_get_product().never();

        let mut res = TestClient::get("http://example.com/api/products")
            .send(&make_service(repo))
            .await;

        let response: Vec<ProductResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(response.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_products_in_order() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products().once().return_once(|| {
            Ok(vec![
                make_product(1, "Top", 1000),
                make_product(2, "Jeans", 2000),
            ])
        });

        repo.expect_get_product().never();

        let response: Vec<ProductResponse> = TestClient::get("http://example.com/api/products")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        let ids: Vec<i64> = response.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![1, 2]);
        assert_eq!(response.first().map(|p| p.name.as_str()), Some("Top"));
        assert_eq!(
            response.first().map(|p| p.price.to_string()),
            Some("1000".to_string())
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(|| Err(ProductsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        repo.expect_get_product().never();

        let mut res = TestClient::get("http://example.com/api/products")
            .send(&make_service(repo))
            .await;

        let body: InternalErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.error, "failed to fetch products");

        Ok(())
    }
}
