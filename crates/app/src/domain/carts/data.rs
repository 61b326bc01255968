//! Cart Data

use crate::domain::{carts::errors::CartsServiceError, products::models::ProductId};

/// New Cart Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub product: ProductId,
    pub qty: u32,
}

impl NewCartItem {
    /// Validate raw request fields.
    ///
    /// A missing or zero value in either field counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`CartsServiceError::MissingRequiredData`] when a field is absent and
    /// [`CartsServiceError::InvalidQuantity`] when `qty` is negative or out of range.
    pub fn new(product: Option<i64>, qty: Option<i64>) -> Result<Self, CartsServiceError> {
        let (Some(product), Some(qty)) = (product.filter(|id| *id != 0), qty.filter(|q| *q != 0))
        else {
            return Err(CartsServiceError::MissingRequiredData);
        };

        let qty = u32::try_from(qty).map_err(|_overflow| CartsServiceError::InvalidQuantity)?;

        Ok(Self {
            product: ProductId::new(product),
            qty,
        })
    }
}
