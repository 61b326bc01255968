//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::products::{
        data::seed_products,
        errors::ProductsServiceError,
        models::{Product, ProductId},
        repository::SqliteProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SqliteProductsService {
    db: Db,
    repository: SqliteProductsRepository,
}

impl SqliteProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteProductsRepository::new(),
        }
    }

    /// Insert the fixed catalog when the products table is empty.
    ///
    /// Returns the number of inserted rows, which is zero when any product already exists.
    ///
    /// # Errors
    ///
    /// Returns an error when counting or inserting products fails.
    pub async fn seed_catalog(&self) -> Result<u64, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let existing = self.repository.count_products(&mut tx).await?;

        if existing > 0 {
            debug!(existing, "catalog already seeded");

            return Ok(0);
        }

        let mut inserted = 0;

        for product in seed_products() {
            inserted += self.repository.create_product(&mut tx, &product).await?;
        }

        tx.commit().await?;

        info!(inserted, "inserted seed products");

        Ok(inserted)
    }
}

#[async_trait]
impl ProductsService for SqliteProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products in id order.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError>;
}
