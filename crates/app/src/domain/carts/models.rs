//! Cart Models

use jiff::Timestamp;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::products::models::{Product, ProductId};

/// Cart Item Model
///
/// One line per product; `qty` is always greater than zero.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: ProductId,
    pub name: String,
    pub price: Decimal,
    pub qty: u32,
}

impl CartItem {
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.qty)
    }
}

/// Cart Model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `price * qty` over all items.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Add `qty` of `product`, merging into an existing line for the same product.
    ///
    /// Returns `None` if the merged quantity would overflow.
    pub(crate) fn add(&mut self, product: Product, qty: u32) -> Option<()> {
        if let Some(item) = self.items.iter_mut().find(|item| item.product == product.id) {
            item.qty = item.qty.checked_add(qty)?;

            return Some(());
        }

        self.items.push(CartItem {
            product: product.id,
            name: product.name,
            price: product.price,
            qty,
        });

        Some(())
    }

    /// Remove the line for `product`, returning whether one existed.
    pub(crate) fn remove(&mut self, product: ProductId) -> bool {
        let before = self.items.len();

        self.items.retain(|item| item.product != product);

        self.items.len() < before
    }
}

/// Receipt Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptItem {
    pub name: String,
    pub qty: u32,
    pub price: Decimal,
}

impl From<CartItem> for ReceiptItem {
    fn from(item: CartItem) -> Self {
        Self {
            name: item.name,
            qty: item.qty,
            price: item.price,
        }
    }
}

/// Receipt Model
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub order_id: String,
    pub total: Decimal,
    pub timestamp: Timestamp,
    pub items: Vec<ReceiptItem>,
}

/// Render an amount with exactly two fractional digits, rounding half away from zero.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    format!("{rounded:.2}")
}
