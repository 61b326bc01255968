//! App Context

use std::{sync::Arc, time::Duration};

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartsService, InMemoryCartsService},
        products::{ProductsService, ProductsServiceError, SqliteProductsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migration(#[source] MigrateError),

    #[error("failed to seed product catalog")]
    Seed(#[source] ProductsServiceError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// Applies migrations and seeds the catalog when it is empty. The cart starts empty.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting, migrating, or seeding fails.
    pub async fn from_database_url(
        url: &str,
        acquire_timeout: Duration,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, acquire_timeout)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migration)?;

        let products = Arc::new(SqliteProductsService::new(Db::new(pool)));

        let seeded = products.seed_catalog().await.map_err(AppInitError::Seed)?;

        info!(seeded, "product catalog ready");

        Ok(Self::new(products))
    }

    /// Build a context around an existing catalog with a fresh, empty cart.
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>) -> Self {
        Self {
            carts: Arc::new(InMemoryCartsService::new(products.clone())),
            products,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::{carts::data::NewCartItem, products::models::ProductId};

    use super::*;

    #[tokio::test]
    async fn context_creates_database_file_and_serves_seeded_catalog() -> TestResult {
        let dir = tempfile::tempdir()?;
        let url = format!("sqlite://{}", dir.path().join("cart.db").display());

        let app = AppContext::from_database_url(&url, Duration::from_secs(5)).await?;

        let products = app.products.list_products().await?;

        assert_eq!(products.len(), 5);

        let cart = app
            .carts
            .add_item(NewCartItem {
                product: ProductId::new(5),
                qty: 1,
            })
            .await?;

        assert_eq!(cart.items.len(), 1);

        let reopened = AppContext::from_database_url(&url, Duration::from_secs(5)).await?;

        assert_eq!(reopened.products.list_products().await?.len(), 5);
        assert!(reopened.carts.get_cart().await.is_empty());

        Ok(())
    }
}
