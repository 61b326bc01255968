//! Carts service.

use std::{mem, sync::Arc};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::{
    carts::{
        data::NewCartItem,
        errors::CartsServiceError,
        models::{Cart, Receipt},
        orders::OrderIds,
    },
    products::{ProductsService, models::ProductId},
};

/// The process-wide cart, held in memory.
///
/// Every read and write goes through one lock, so concurrent requests never lose updates.
/// Catalog lookups happen before the lock is taken.
pub struct InMemoryCartsService {
    products: Arc<dyn ProductsService>,
    cart: Mutex<Cart>,
    order_ids: OrderIds,
}

impl InMemoryCartsService {
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>) -> Self {
        Self {
            products,
            cart: Mutex::new(Cart::default()),
            order_ids: OrderIds::default(),
        }
    }
}

#[async_trait]
impl CartsService for InMemoryCartsService {
    async fn add_item(&self, item: NewCartItem) -> Result<Cart, CartsServiceError> {
        let product = self.products.get_product(item.product).await?;

        let mut cart = self.cart.lock().await;

        cart.add(product, item.qty)
            .ok_or(CartsServiceError::InvalidQuantity)?;

        debug!(product_id = %item.product, qty = item.qty, "added item to cart");

        Ok(cart.clone())
    }

    async fn remove_item(&self, product: ProductId) -> Result<Cart, CartsServiceError> {
        let mut cart = self.cart.lock().await;

        if !cart.remove(product) {
            return Err(CartsServiceError::ItemNotFound);
        }

        debug!(product_id = %product, "removed item from cart");

        Ok(cart.clone())
    }

    async fn get_cart(&self) -> Cart {
        self.cart.lock().await.clone()
    }

    async fn checkout(&self) -> Result<Receipt, CartsServiceError> {
        let mut cart = self.cart.lock().await;

        if cart.is_empty() {
            return Err(CartsServiceError::EmptyCart);
        }

        let total = cart.total();
        let timestamp = Timestamp::now();
        let order_id = self.order_ids.next(timestamp);
        let items = mem::take(&mut cart.items);

        info!(%order_id, %total, items = items.len(), "checked out cart");

        Ok(Receipt {
            order_id,
            total,
            timestamp,
            items: items.into_iter().map(Into::into).collect(),
        })
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Add a product to the cart, or increase its quantity if already present.
    async fn add_item(&self, item: NewCartItem) -> Result<Cart, CartsServiceError>;

    /// Remove the line for the given product.
    async fn remove_item(&self, product: ProductId) -> Result<Cart, CartsServiceError>;

    /// Snapshot of the current cart.
    async fn get_cart(&self) -> Cart;

    /// Empty the cart and return a receipt for its contents.
    async fn checkout(&self) -> Result<Receipt, CartsServiceError>;
}
